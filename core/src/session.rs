use crate::*;

/// Settings travel between the configuration page and the play page as an
/// opaque JSON blob in external key-value storage. The core does not persist
/// anything itself; it only defines the blob codec so the value that comes
/// back is validated before it ever reaches the engine.

pub fn encode_settings(settings: &GameSettings) -> String {
    serde_json::to_string(settings).expect("settings serialize to plain json")
}

/// Decodes and validates a persisted blob. Any parse failure or limit
/// violation is fatal to the loading flow; the caller redirects the player to
/// the configuration step.
pub fn decode_settings(blob: &str) -> Result<GameSettings, SettingsBlobError> {
    let settings: GameSettings = serde_json::from_str(blob)?;
    settings.validate()?;
    Ok(settings)
}
