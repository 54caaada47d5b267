use fyyur_e2e_tests::launch_env;
use tracing::info;
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_health() {
    let env = launch_env("test_health").await.unwrap();

    let response = env.client.get(env.url("/health")).send().await.unwrap();
    info! {"Response: {:#?}", response};
    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "OK");

    let response = env.client.get(env.url("/")).send().await.unwrap();
    assert!(response.status().is_success());
    let page = response.text().await.unwrap();
    assert!(page.contains("0 venues"));
}
