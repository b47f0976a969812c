//! Server-side page rendering with embedded minijinja templates.

use minijinja::{Environment, context};
use solarlead_core::FaqSections;
use solarlead_core::config::SiteConfig;

use crate::Result;

const INDEX: &str = "index.html";

/// Compiled page templates.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Loads the embedded templates. `.html` templates are auto-escaped.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(INDEX, include_str!("../templates/index.html"))?;
        Ok(Self { env })
    }

    /// Renders the landing page.
    pub fn home(&self, site: &SiteConfig, faqs: &FaqSections, csrf_token: &str) -> Result<String> {
        let template = self.env.get_template(INDEX)?;
        let categories: Vec<_> = solarlead_core::FaqCategory::ALL
            .into_iter()
            .map(|c| context! { key => c.as_str(), label => c.label() })
            .collect();
        let html = template.render(context! {
            site,
            faqs,
            categories,
            faq_total => faqs.total(),
            csrf_token,
        })?;
        Ok(html)
    }
}
