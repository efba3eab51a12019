use super::types::{AddVoiceResponse, Voice, VoiceUpload, VoicesResponse};
use crate::client::validation::require_non_empty;
use crate::transport::{HttpTransport, RequestSpec};
use crate::tts::VoiceSettings;
use crate::Result;
use serde_json::Value;

/// `/v1/voices` resource group.
pub struct Voices<'a> {
    transport: &'a HttpTransport,
}

impl<'a> Voices<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// All voices available to the account.
    pub async fn list(&self) -> Result<Vec<Voice>> {
        let resp: VoicesResponse = self
            .transport
            .execute_json(RequestSpec::get(&["v1", "voices"]))
            .await?;
        Ok(resp.voices)
    }

    /// Alias of [`list`](Self::list).
    pub async fn get_all(&self) -> Result<Vec<Voice>> {
        self.list().await
    }

    pub async fn get(&self, voice_id: &str) -> Result<Voice> {
        require_non_empty("voice_id", voice_id)?;
        self.transport
            .execute_json(RequestSpec::get(&["v1", "voices", voice_id]))
            .await
    }

    pub async fn delete(&self, voice_id: &str) -> Result<Value> {
        require_non_empty("voice_id", voice_id)?;
        self.transport
            .execute(RequestSpec::delete(&["v1", "voices", voice_id]))
            .await?
            .into_json()
    }

    /// Creates an instant voice clone from the uploaded samples.
    pub async fn add(&self, upload: &VoiceUpload) -> Result<AddVoiceResponse> {
        let form = upload.to_form(true)?;
        self.transport
            .execute_json(RequestSpec::post(&["v1", "voices", "add"]).multipart(form))
            .await
    }

    /// Renames/relabels a voice, optionally adding more samples.
    pub async fn edit(&self, voice_id: &str, upload: &VoiceUpload) -> Result<Value> {
        require_non_empty("voice_id", voice_id)?;
        let form = upload.to_form(false)?;
        self.transport
            .execute(RequestSpec::post(&["v1", "voices", voice_id, "edit"]).multipart(form))
            .await?
            .into_json()
    }

    pub async fn get_settings(&self, voice_id: &str) -> Result<VoiceSettings> {
        require_non_empty("voice_id", voice_id)?;
        self.transport
            .execute_json(RequestSpec::get(&["v1", "voices", voice_id, "settings"]))
            .await
    }

    pub async fn get_default_settings(&self) -> Result<VoiceSettings> {
        self.transport
            .execute_json(RequestSpec::get(&["v1", "voices", "settings", "default"]))
            .await
    }

    pub async fn edit_settings(&self, voice_id: &str, settings: &VoiceSettings) -> Result<Value> {
        require_non_empty("voice_id", voice_id)?;
        settings.validate()?;
        let spec = RequestSpec::post(&["v1", "voices", voice_id, "settings", "edit"]).json(settings)?;
        self.transport.execute(spec).await?.into_json()
    }
}
