use std::path::PathBuf;

use hf_hub::api::sync::Api;

/// Download a model's config from the Hugging Face Hub.
/// If the file exists in the cache, it will not be downloaded again.
pub fn download_hf_config(model_name: &str) -> anyhow::Result<PathBuf> {
    let api = Api::new()?;
    let repo = api.model(model_name.to_string());

    log::info!("Fetching config.json for {}", model_name);

    repo.get("config.json").map_err(|e| {
        anyhow!(
            "Failed to download: {} config with name: config.json from HuggingFace Hub: {}",
            model_name,
            e
        )
    })
}
