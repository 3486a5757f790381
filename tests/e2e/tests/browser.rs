use e2e::{browser::Browser, test_server::TestServer};
use std::time::Duration;

#[tokio::test]
async fn test_root_redirects_to_a_locale() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");

    let page = browser.open(&server.page("/")).expect("Failed to open root");

    // Headless chrome reports an English navigator.language.
    page.wait_for_path("/en", Duration::from_secs(10))
        .expect("root should land on a locale");
}

#[tokio::test]
async fn test_language_switcher_changes_locale() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");

    let page = browser.open(&server.page("/en")).expect("Failed to open /en");
    assert!(page.text("#hero h1").expect("hero title").contains("Lary Enock"));

    page.click(".lang_toggle").expect("open language menu");
    // Menu order follows the supported locales: English, then French.
    page.click(".lang_menu li:nth-child(2) .lang_option")
        .expect("pick French");

    page.wait_for_path("/fr", Duration::from_secs(10))
        .expect("switching to French navigates to /fr");
    assert_eq!(
        page.text("a.nav_link[href='#about']").expect("nav link"),
        "À propos"
    );
}

#[tokio::test]
async fn test_contact_form_reports_invalid_email() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");

    let page = browser.open(&server.page("/en")).expect("Failed to open /en");

    page.fill("input[name='name']", "Ada").expect("type name");
    page.fill("input[name='email']", "not-an-email")
        .expect("type email");
    page.fill("textarea[name='message']", "Hello there")
        .expect("type message");
    page.click(".contact_form button[type='submit']")
        .expect("submit");

    assert_eq!(
        page.text(".notice.error").expect("error notice"),
        "Please enter a valid email address."
    );
}
