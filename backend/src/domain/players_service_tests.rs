//! Tests for the store-backed players service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{InMemoryPlayerRepository, MockPlayerRepository};

#[fixture]
fn in_memory_service() -> PlayersServiceImpl<InMemoryPlayerRepository> {
    PlayersServiceImpl::new(Arc::new(InMemoryPlayerRepository::new()))
}

#[rstest]
#[tokio::test]
async fn create_then_get_returns_the_submitted_fields(
    in_memory_service: PlayersServiceImpl<InMemoryPlayerRepository>,
) {
    let fields = PlayerFields::named("Alice")
        .with_team("Lions")
        .with_position("striker");

    let id = in_memory_service
        .create_player(fields.clone())
        .await
        .expect("create succeeds");
    let player = in_memory_service.get_player(id).await.expect("get succeeds");

    assert_eq!(player, Player::new(id, fields));
}

#[rstest]
#[tokio::test]
async fn create_rejects_blank_name_without_touching_the_store() {
    let mut repo = MockPlayerRepository::new();
    repo.expect_create().times(0);

    let service = PlayersServiceImpl::new(Arc::new(repo));
    let error = service
        .create_player(PlayerFields::named("  "))
        .await
        .expect_err("blank name rejected");

    assert_eq!(error.code(), ErrorCode::Validation);
    assert_eq!(error.message(), "player name must not be empty");
}

#[rstest]
#[case(PlayerRepositoryError::connection("refused"), "player store unavailable: refused")]
#[case(PlayerRepositoryError::query("syntax"), "player store error: syntax")]
#[tokio::test]
async fn create_maps_repository_failures_to_store_errors(
    #[case] failure: PlayerRepositoryError,
    #[case] expected_message: &str,
) {
    let mut repo = MockPlayerRepository::new();
    repo.expect_create()
        .times(1)
        .return_once(move |_| Err(failure));

    let service = PlayersServiceImpl::new(Arc::new(repo));
    let error = service
        .create_player(PlayerFields::named("Alice"))
        .await
        .expect_err("store failure surfaces");

    assert_eq!(error.code(), ErrorCode::Store);
    assert_eq!(error.message(), expected_message);
}

#[rstest]
#[tokio::test]
async fn get_of_unknown_id_is_not_found() {
    let mut repo = MockPlayerRepository::new();
    repo.expect_find_by_id()
        .with(eq(PlayerId::new(42)))
        .times(1)
        .return_once(|_| Ok(None));

    let service = PlayersServiceImpl::new(Arc::new(repo));
    let error = service
        .get_player(PlayerId::new(42))
        .await
        .expect_err("unknown id");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "player 42 not found");
}

#[rstest]
#[tokio::test]
async fn get_maps_connection_failure_to_store_error() {
    let mut repo = MockPlayerRepository::new();
    repo.expect_find_by_id()
        .return_once(|_| Err(PlayerRepositoryError::connection("pool exhausted")));

    let service = PlayersServiceImpl::new(Arc::new(repo));
    let error = service
        .get_player(PlayerId::new(1))
        .await
        .expect_err("store failure");

    assert_eq!(error.code(), ErrorCode::Store);
}

#[rstest]
#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let mut repo = MockPlayerRepository::new();
    repo.expect_update().times(1).return_once(|_, _| Ok(false));

    let service = PlayersServiceImpl::new(Arc::new(repo));
    let error = service
        .update_player(PlayerId::new(5), PlayerFields::named("Ghost"))
        .await
        .expect_err("unknown id");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_rejects_blank_name_before_lookup() {
    let mut repo = MockPlayerRepository::new();
    repo.expect_update().times(0);

    let service = PlayersServiceImpl::new(Arc::new(repo));
    let error = service
        .update_player(PlayerId::new(1), PlayerFields::named(""))
        .await
        .expect_err("blank name");

    assert_eq!(error.code(), ErrorCode::Validation);
}

#[rstest]
#[tokio::test]
async fn update_replaces_stored_fields(
    in_memory_service: PlayersServiceImpl<InMemoryPlayerRepository>,
) {
    let id = in_memory_service
        .create_player(PlayerFields::named("Alice"))
        .await
        .expect("create");
    in_memory_service
        .update_player(id, PlayerFields::named("Alice").with_team("Tigers"))
        .await
        .expect("update");

    let player = in_memory_service.get_player(id).await.expect("get");
    assert_eq!(player.fields.team.as_deref(), Some("Tigers"));
}

#[rstest]
#[tokio::test]
async fn delete_is_not_idempotent(
    in_memory_service: PlayersServiceImpl<InMemoryPlayerRepository>,
) {
    let id = in_memory_service
        .create_player(PlayerFields::named("Alice"))
        .await
        .expect("create");

    in_memory_service
        .delete_player(id)
        .await
        .expect("first delete succeeds");
    let error = in_memory_service
        .delete_player(id)
        .await
        .expect_err("second delete fails");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn alice_lifecycle_ends_in_not_found(
    in_memory_service: PlayersServiceImpl<InMemoryPlayerRepository>,
) {
    let id = in_memory_service
        .create_player(PlayerFields::named("Alice"))
        .await
        .expect("create");
    assert_eq!(id, PlayerId::new(1));

    let player = in_memory_service.get_player(id).await.expect("get");
    assert_eq!(player.name(), "Alice");

    in_memory_service.delete_player(id).await.expect("delete");
    let error = in_memory_service
        .get_player(id)
        .await
        .expect_err("gone after delete");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn list_of_empty_store_is_empty_not_an_error(
    in_memory_service: PlayersServiceImpl<InMemoryPlayerRepository>,
) {
    let players = in_memory_service.list_players().await.expect("list");
    assert!(players.is_empty());
}

#[rstest]
#[tokio::test]
async fn list_returns_every_player_once(
    in_memory_service: PlayersServiceImpl<InMemoryPlayerRepository>,
) {
    let mut created = Vec::new();
    for index in 0..5 {
        let id = in_memory_service
            .create_player(PlayerFields::named(format!("player-{index}")))
            .await
            .expect("create");
        created.push(id);
    }

    let listed: Vec<PlayerId> = in_memory_service
        .list_players()
        .await
        .expect("list")
        .into_iter()
        .map(|player| player.id)
        .collect();
    assert_eq!(listed, created);
}
