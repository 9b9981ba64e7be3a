use secpanel::PanelConfig;
use web_sys::Document;

use crate::services::{bootstrap_available, init_modals, init_tooltips};
use crate::types::AppResult;

pub fn init_widgets(document: &Document, _config: &PanelConfig) -> AppResult<()> {
    if !bootstrap_available() {
        log::warn!("Bootstrap is not loaded, tooltips and modals stay inert");
        return Ok(());
    }

    let tooltips = init_tooltips(document)?;
    let modals = init_modals(document)?;
    log::debug!("{} tooltips and {} modals initialized", tooltips, modals);
    Ok(())
}
