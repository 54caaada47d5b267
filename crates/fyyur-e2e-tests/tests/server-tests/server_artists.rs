use fyyur_e2e_tests::launch_env;
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_artist_edit() {
    let env = launch_env("test_artist_edit").await.unwrap();
    let client = &env.client;

    let artist = [
        ("name", "Matt Quevedo"),
        ("city", "New York"),
        ("state", "NY"),
        ("genres", "Jazz"),
        ("facebook_link", "https://www.facebook.com/mattquevedo923251523"),
    ];
    let page = client
        .post(env.url("/artists/create"))
        .form(&artist)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("Artist Matt Quevedo was successfully listed!"));

    let page = client
        .get(env.url("/artists/1/edit"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains(r#"value="Matt Quevedo""#));

    let mut edited = artist.to_vec();
    edited[1] = ("city", "Boston");
    edited[2] = ("state", "MA");
    let response = client
        .post(env.url("/artists/1/edit"))
        .form(&edited)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert_eq!(response.url().path(), "/artists/1");
    let page = response.text().await.unwrap();
    assert!(page.contains(r#"Boston, <abbr title="Massachusetts">MA</abbr>"#));
    assert!(page.contains("Artist Matt Quevedo was successfully updated!"));

    let response = client
        .post(env.url("/artists/7/edit"))
        .form(&edited)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}
