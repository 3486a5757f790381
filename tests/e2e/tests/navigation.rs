use e2e::test_server::TestServer;

async fn fetch(server: &TestServer, path: &str) -> (u16, String) {
    let response = reqwest::get(server.page(path))
        .await
        .expect("Failed to fetch page");
    let status = response.status().as_u16();
    let body = response.text().await.expect("Failed to read body");
    (status, body)
}

#[tokio::test]
async fn test_locale_pages_render() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let (status, body) = fetch(&server, "/en").await;
    assert_eq!(status, 200, "/en should return 200 OK");
    assert!(body.contains("Lary Enock"), "English hero should render");
    assert!(body.contains("About"), "English navigation should render");
    assert!(body.contains("lang=\"en\"") || body.contains("Fullstack Developer"));

    let (status, body) = fetch(&server, "/fr").await;
    assert_eq!(status, 200, "/fr should return 200 OK");
    assert!(body.contains("Bonjour"), "French hero should render");
    assert!(body.contains("Compétences"), "French navigation should render");
}

#[tokio::test]
async fn test_unknown_locale_is_not_found() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let (status, body) = fetch(&server, "/de").await;
    assert_eq!(status, 404, "/de should return 404");
    assert!(body.contains("Page not found"), "unsupported locale renders the 404 page");
    assert!(!body.contains("Bonjour"));

    let (status, body) = fetch(&server, "/fr/nowhere").await;
    assert_eq!(status, 404, "/fr/nowhere should return 404");
    assert!(
        body.contains("Page introuvable"),
        "404 under a supported locale is localized"
    );

    // Locale codes are matched exactly.
    let (status, body) = fetch(&server, "/EN").await;
    assert_eq!(status, 404, "/EN should return 404");
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn test_featured_content_is_served() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let (status, body) = fetch(&server, "/api/skills/featured").await;
    assert_eq!(status, 200);
    assert!(body.trim_start().starts_with('['), "skills come back as a JSON array");
    assert!(!body.contains("COBOL"), "non-featured skills stay hidden");

    let (status, body) = fetch(&server, "/api/projects/featured").await;
    assert_eq!(status, 200);
    assert!(body.contains("title_en"), "seeded projects are returned");
}
