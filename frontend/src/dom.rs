use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlScriptElement, ScrollBehavior, ScrollToOptions};

use crate::config;
use crate::error::DomError;
use crate::navigation::SeoMeta;

fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

fn remove_all(document: &Document, selector: &str) -> Result<(), DomError> {
    let nodes = document.query_selector_all(selector)?;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            element.remove();
        }
    }
    Ok(())
}

fn scroll_to_top_options() -> ScrollToOptions {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    options
}

/// Smoothly scrolls the window back to the top.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_scroll_to_options(&scroll_to_top_options());
    }
}

/// Points title, meta description and the canonical link at `meta`.
/// The canonical link is replaced, so there is only ever one.
pub fn apply_seo(meta: &SeoMeta) -> Result<(), DomError> {
    let document = document()?;
    let head = document.head().ok_or(DomError::NoHead)?;

    document.set_title(meta.title);

    let description = match document.query_selector("meta[name=\"description\"]")? {
        Some(existing) => existing,
        None => {
            let created = document.create_element("meta")?;
            created.set_attribute("name", "description")?;
            head.append_child(&created)?;
            created
        }
    };
    description.set_attribute("content", meta.description)?;

    remove_all(&document, "link[rel=\"canonical\"]")?;
    let canonical = document.create_element("link")?;
    canonical.set_attribute("rel", "canonical")?;
    canonical.set_attribute("href", &format!("{}{}", config::get_site_origin(), meta.path))?;
    head.append_child(&canonical)?;

    Ok(())
}

/// A `<script>` appended to `<head>` for as long as the value lives.
pub struct ExternalScript {
    script: HtmlScriptElement,
    _on_load: Closure<dyn FnMut()>,
}

impl ExternalScript {
    /// Drops any earlier copies matching `stale_selector`, then loads `src`
    /// asynchronously and runs `on_load` once it has executed.
    pub fn load(
        src: &str,
        stale_selector: &str,
        on_load: impl FnMut() + 'static,
    ) -> Result<Self, DomError> {
        let document = document()?;
        let head = document.head().ok_or(DomError::NoHead)?;

        remove_all(&document, stale_selector)?;

        let script: HtmlScriptElement = document
            .create_element("script")?
            .dyn_into()
            .map_err(|_| DomError::WrongElement("script"))?;
        script.set_src(src);
        script.set_async(true);

        let on_load = Closure::wrap(Box::new(on_load) as Box<dyn FnMut()>);
        script.set_onload(Some(on_load.as_ref().unchecked_ref()));
        head.append_child(&script)?;
        debug!("Appended script {}", src);

        Ok(Self {
            script,
            _on_load: on_load,
        })
    }
}

impl Drop for ExternalScript {
    fn drop(&mut self) {
        // the closure is freed with us, so the element must not call it afterwards
        self.script.set_onload(None);
        self.script.remove();
        debug!("Removed script {}", self.script.src());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const TEST_SCRIPT: &str = "https://example.invalid/embed-test.js";
    const TEST_SCRIPT_SELECTOR: &str = "script[src=\"https://example.invalid/embed-test.js\"]";

    fn count(selector: &str) -> u32 {
        document()
            .and_then(|d| Ok(d.query_selector_all(selector)?))
            .map(|nodes| nodes.length())
            .unwrap_or(0)
    }

    fn seo(title: &'static str, description: &'static str, path: &str) -> SeoMeta {
        SeoMeta {
            title,
            description,
            path: path.to_string(),
        }
    }

    #[derive(serde::Deserialize)]
    struct Scroll {
        top: f64,
        behavior: String,
    }

    #[wasm_bindgen_test]
    fn scroll_reset_is_smooth() {
        let scroll: Scroll = serde_wasm_bindgen::from_value(scroll_to_top_options().into()).unwrap();
        assert_eq!(scroll.top, 0.0);
        assert_eq!(scroll.behavior, "smooth");

        scroll_to_top();
    }

    #[wasm_bindgen_test]
    fn repeated_seo_keeps_single_head_tags() {
        apply_seo(&seo("First", "first description", "/services")).unwrap();
        apply_seo(&seo("Second", "second description", "/faqs")).unwrap();

        let document = document().unwrap();
        assert_eq!(document.title(), "Second");

        assert_eq!(count("link[rel=\"canonical\"]"), 1);
        let canonical = document.query_selector("link[rel=\"canonical\"]").unwrap().unwrap();
        assert!(canonical.get_attribute("href").unwrap().ends_with("/faqs"));

        assert_eq!(count("meta[name=\"description\"]"), 1);
        let description = document.query_selector("meta[name=\"description\"]").unwrap().unwrap();
        assert_eq!(description.get_attribute("content").as_deref(), Some("second description"));
    }

    #[wasm_bindgen_test]
    fn dropping_script_removes_it_from_head() {
        let script = ExternalScript::load(TEST_SCRIPT, TEST_SCRIPT_SELECTOR, || ()).unwrap();
        assert_eq!(count(TEST_SCRIPT_SELECTOR), 1);

        drop(script);
        assert!(document().unwrap().query_selector(TEST_SCRIPT_SELECTOR).unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn loading_again_replaces_stale_copy() {
        let first = ExternalScript::load(TEST_SCRIPT, TEST_SCRIPT_SELECTOR, || ()).unwrap();
        let second = ExternalScript::load(TEST_SCRIPT, TEST_SCRIPT_SELECTOR, || ()).unwrap();
        assert_eq!(count(TEST_SCRIPT_SELECTOR), 1);

        drop(first);
        drop(second);
        assert_eq!(count(TEST_SCRIPT_SELECTOR), 0);
    }
}
