//! External links and endpoints used across the site.

pub const GITHUB_LINK: &str = "https://github.com/CharlesQ9/HistAgent";
pub const PAPER_LINK: &str = "https://arxiv.org/abs/2505.20246";
pub const DATASET_LINK: &str = "https://huggingface.co/datasets/jiahaoq/HistBench";
pub const DEMO_LINK: &str = "https://historydeepresearch.streamlit.app/";

/// Base URL of the submission functions. Overridable at build time so a
/// local emulator can be targeted during development.
#[must_use]
pub fn functions_base_url() -> &'static str {
    option_env!("HISTAI_FUNCTIONS_URL").unwrap_or("https://functions.histai.org")
}

/// Endpoint accepting the contribution payload.
#[must_use]
pub fn submission_endpoint() -> String {
    format!("{}/submissions", functions_base_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_endpoint_joins_base_and_path() {
        assert!(submission_endpoint().ends_with("/submissions"));
        assert!(submission_endpoint().starts_with(functions_base_url()));
    }
}
