use fyyur_e2e_tests::launch_env;
use tracing_test::traced_test;

const HOP: &[(&str, &str)] = &[
    ("name", "The Musical Hop"),
    ("city", "San Francisco"),
    ("state", "CA"),
    ("address", "1015 Folsom Street"),
    ("phone", "123-123-1234"),
    ("genres", "Jazz"),
    ("genres", "Reggae"),
    ("website_link", "https://www.themusicalhop.com"),
    ("seeking_talent", "y"),
];

const PIANOS: &[(&str, &str)] = &[
    ("name", "The Dueling Pianos Bar"),
    ("city", "New York"),
    ("state", "NY"),
    ("address", "335 Delancey Street"),
    ("genres", "Classical"),
];

#[tokio::test]
#[traced_test]
async fn test_venue_lifecycle() {
    let env = launch_env("test_venue_lifecycle").await.unwrap();
    let client = &env.client;

    let response = client
        .post(env.url("/venues/create"))
        .form(HOP)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert!(response.url().path() == "/");
    let page = response.text().await.unwrap();
    assert!(page.contains("Venue The Musical Hop was successfully listed!"));

    client
        .post(env.url("/venues/create"))
        .form(PIANOS)
        .send()
        .await
        .unwrap();

    let page = client
        .get(env.url("/venues"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("San Francisco, CA"));
    assert!(page.contains("New York, NY"));

    let page = client
        .post(env.url("/venues/search"))
        .form(&[("search_term", "piano")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains(r#"Number of search results for "piano": 1"#));

    let response = client
        .post(env.url("/venues/2/delete"))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let page = response.text().await.unwrap();
    assert!(page.contains("Venue successfully deleted!"));

    let response = client.get(env.url("/venues/2")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
#[traced_test]
async fn test_invalid_venue() {
    let env = launch_env("test_invalid_venue").await.unwrap();

    let response = env
        .client
        .post(env.url("/venues/create"))
        .form(&[("name", "Nowhere"), ("state", "ZZ")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 422);

    let response = env.client.get(env.url("/venues/abc")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 400);
}
