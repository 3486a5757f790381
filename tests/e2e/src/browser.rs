use anyhow::{Context, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Wide enough that the header shows its links instead of the mobile menu.
const DESKTOP_VIEWPORT: (u32, u32) = (1280, 900);

pub struct Browser {
    chrome: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some(DESKTOP_VIEWPORT))
            .build()
            .context("invalid chrome launch options")?;

        Ok(Self {
            chrome: ChromeBrowser::new(options)?,
        })
    }

    /// New tab already loaded at `url`.
    pub fn open(&self, url: &str) -> Result<Page> {
        let tab = self.chrome.new_tab()?;
        tab.navigate_to(url)?.wait_until_navigated()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    /// Rendered text of the first element matching `selector`.
    pub fn text(&self, selector: &str) -> Result<String> {
        let text = self
            .tab
            .wait_for_element(selector)
            .with_context(|| format!("no element matches {selector}"))?
            .get_inner_text()?;
        Ok(text.trim().to_string())
    }

    pub fn fill(&self, selector: &str, value: &str) -> Result<()> {
        let field = self.tab.wait_for_element(selector)?;
        field.click()?;
        field.type_into(value)?;
        Ok(())
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        self.tab
            .wait_for_element(selector)
            .with_context(|| format!("nothing to click at {selector}"))?
            .click()?;
        Ok(())
    }

    /// Path of the current URL, without query or fragment.
    pub fn path(&self) -> String {
        let url = self.tab.get_url();
        let after_host = url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&url);
        let path = after_host
            .find('/')
            .map(|idx| &after_host[idx..])
            .unwrap_or("/");
        path.split(['?', '#']).next().unwrap_or("/").to_string()
    }

    /// Poll until the path equals `expected`. Client-side navigation fires
    /// no load event to wait on.
    pub fn wait_for_path(&self, expected: &str, timeout: Duration) -> Result<()> {
        let started = Instant::now();
        while started.elapsed() < timeout {
            if self.path() == expected {
                return Ok(());
            }
            std::thread::sleep(Duration::from_millis(100));
        }
        anyhow::bail!("still at {} after {timeout:?}, expected {expected}", self.path())
    }
}
