use minijinja::Environment;
use serde::Serialize;

use crate::state::PredictionResult;

const INDEX_TEMPLATE: &str = "index.html";

/// What the upload page shows below the form.
#[derive(Debug, Default, Serialize)]
pub struct PageView<'a> {
    pub prediction: Option<&'a PredictionResult>,
    pub error: Option<&'a str>,
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
        Ok(Renderer { env })
    }

    pub fn page(&self, view: &PageView<'_>) -> Result<String, minijinja::Error> {
        self.env.get_template(INDEX_TEMPLATE)?.render(view)
    }
}
