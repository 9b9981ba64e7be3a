//! QR-code scanner helpers exposed to inline template handlers.

use gloo_timers::future::TimeoutFuture;
use rand::seq::SliceRandom;
use secpanel::panel::DEMO_CODES;
use web_sys::HtmlInputElement;

use crate::config::QR_INPUT_ID;
use crate::dom::element_by_id;
use crate::types::AppResult;

/// Put the cursor in the scan input so a handheld scanner can type into it.
pub fn focus_scan_input() -> AppResult<()> {
    let input: HtmlInputElement = element_by_id(&gloo_utils::document(), QR_INPUT_ID)?;
    input.focus()?;
    Ok(())
}

/// Pretend to read a badge: wait `delay_ms`, then yield a demo code.
pub async fn simulate_scan(delay_ms: u32) -> String {
    TimeoutFuture::new(delay_ms).await;
    pick_demo_code(&mut rand::thread_rng()).to_string()
}

fn pick_demo_code<R: rand::Rng + ?Sized>(rng: &mut R) -> &'static str {
    DEMO_CODES.choose(rng).copied().unwrap_or(DEMO_CODES[0])
}
