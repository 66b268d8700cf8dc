//! Diesel table definitions, kept in step with `migrations/`.

diesel::table! {
    players (id) {
        id -> Int8,
        name -> Varchar,
        team -> Nullable<Varchar>,
        position -> Nullable<Varchar>,
    }
}
