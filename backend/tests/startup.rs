//! Startup against an unreachable store fails before any listener opens.

use roster::domain::ports::PlayerRepositoryError;
use roster::server::{StartupError, connect_store};
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn unreachable_store_is_a_startup_error() {
    let url = "host=127.0.0.1 port=1 dbname=roster connect_timeout=2 sslmode=disable";

    let err = connect_store(url.to_owned(), 1)
        .await
        .expect_err("nothing listens on port 1");

    assert!(
        matches!(err, StartupError::Store(PlayerRepositoryError::Connection { .. })),
        "unexpected error: {err:?}"
    );
    assert!(err.to_string().starts_with("failed to connect to database: "));

    // The binary propagates this error unchanged into its fatal report.
    let report = color_eyre::eyre::Report::from(err);
    let rendered = report.to_string();
    assert_eq!(rendered.matches("failed to connect to database").count(), 1, "{rendered}");
}
