use fyyur_e2e_tests::launch_env;
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_show_listing() {
    let env = launch_env("test_show_listing").await.unwrap();
    let client = &env.client;

    client
        .post(env.url("/venues/create"))
        .form(&[
            ("name", "Park Square Live Music & Coffee"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "34 Whiskey Moore Ave"),
            ("genres", "Folk"),
        ])
        .send()
        .await
        .unwrap();
    client
        .post(env.url("/artists/create"))
        .form(&[
            ("name", "The Wild Sax Band"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("genres", "Jazz"),
        ])
        .send()
        .await
        .unwrap();

    let page = client
        .post(env.url("/shows/create"))
        .form(&[
            ("artist_id", "1"),
            ("venue_id", "1"),
            ("start_time", "2019-06-15 23:00:00"),
        ])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("Show was successfully listed!"));

    client
        .post(env.url("/shows/create"))
        .form(&[
            ("artist_id", "1"),
            ("venue_id", "1"),
            ("start_time", "2035-04-01T20:00"),
        ])
        .send()
        .await
        .unwrap();

    let page = client
        .get(env.url("/shows"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("The Wild Sax Band"));
    assert!(page.contains("Park Square Live Music &amp; Coffee"));

    let page = client
        .get(env.url("/artists/1"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("<h2>1 Past Show</h2>"));
    assert!(page.contains("<h2>1 Upcoming Show</h2>"));

    let response = client
        .post(env.url("/shows/create"))
        .form(&[
            ("artist_id", "5"),
            ("venue_id", "1"),
            ("start_time", "2035-04-01T20:00"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 409);
    let page = response.text().await.unwrap();
    assert!(page.contains("An error occurred. Show could not be listed."));
}
