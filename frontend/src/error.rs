use thiserror::Error;

/// Why a page feature did not attach. None of these are failures from the
/// visitor's point of view; the feature simply stays inert.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("no element matches `{0}`")]
    MissingElement(&'static str),
    #[error("no panels match `{0}`")]
    NoPanels(&'static str),
    #[error("browser API unavailable: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for MountError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        MountError::Js(format!("{:?}", value))
    }
}
