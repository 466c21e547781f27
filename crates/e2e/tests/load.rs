//! Concurrent load: the login-and-order flow across virtual users.

use pizzasim_e2e::run_load;

#[tokio::test]
async fn concurrent_virtual_users_all_complete() {
    let report = run_load(8, 3).await.unwrap();
    assert_eq!(report.failed, 0);
    assert_eq!(report.completed, 8 * 3);
}

#[tokio::test]
async fn a_single_user_run_completes() {
    let report = run_load(1, 1).await.unwrap();
    assert_eq!(report.completed, 1);
    assert_eq!(report.failed, 0);
}
