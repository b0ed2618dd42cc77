use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::config::GrindConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetSheet(String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {
            let config = GrindConfig::load(config_dir)?;
            result = result.with_config(config);
        }
        ConfigAction::SetSheet(path) => {
            let mut config = GrindConfig::load(config_dir)?;
            config.set_sheet(&path);
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("sheet = {}", path)));
            result = result.with_config(config);
        }
    }

    Ok(result)
}
