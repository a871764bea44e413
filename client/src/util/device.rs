//! Device capability heuristic for deciding how much animation to run.

#[cfg(test)]
#[path = "device_test.rs"]
mod device_test;

/// Signals gathered from the platform. Unknown values are `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeviceHints {
    pub cores: Option<u32>,
    pub memory_gb: Option<f64>,
    pub save_data: bool,
    pub reduced_motion: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionBudget {
    /// All animations, including background effects.
    #[default]
    Full,
    /// Entrance transitions only.
    Reduced,
    /// No motion beyond instant state changes.
    Minimal,
}

const LOW_END_CORES: u32 = 2;
const LOW_END_MEMORY_GB: f64 = 2.0;

impl DeviceHints {
    pub fn motion_budget(&self) -> MotionBudget {
        if self.reduced_motion || self.save_data {
            return MotionBudget::Minimal;
        }
        let few_cores = self.cores.is_some_and(|c| c <= LOW_END_CORES);
        let little_memory = self.memory_gb.is_some_and(|m| m < LOW_END_MEMORY_GB);
        if few_cores || little_memory {
            MotionBudget::Reduced
        } else {
            MotionBudget::Full
        }
    }

    /// Read hints from the browser. Server-side this is all-unknown.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            detect_browser().unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

#[cfg(feature = "hydrate")]
fn detect_browser() -> Option<DeviceHints> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let navigator = window.navigator();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cores = Some(navigator.hardware_concurrency())
        .filter(|c| *c > 0.0)
        .map(|c| c as u32);
    // `deviceMemory` and `connection.saveData` are not in every engine.
    let memory_gb = js_sys::Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|v| v.as_f64());
    let save_data = js_sys::Reflect::get(&navigator, &JsValue::from_str("connection"))
        .ok()
        .filter(|c| c.is_object())
        .and_then(|c| js_sys::Reflect::get(&c, &JsValue::from_str("saveData")).ok())
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    let reduced_motion = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map_or(false, |mq| mq.matches());

    Some(DeviceHints {
        cores,
        memory_gb,
        save_data,
        reduced_motion,
    })
}
