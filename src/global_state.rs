use futures::future::AbortHandle;
use leptos::*;
use once_cell::sync::OnceCell;

use crate::global_signals;

/// Reactive state shared across components and with the animation loop.
pub struct Globals {
    pub is_animating: RwSignal<bool>,
    pub current_input_size: RwSignal<u32>,
    pub point_count: RwSignal<usize>,
    pub latest_sorting_cost: RwSignal<f64>,
    pub latest_queue_cost: RwSignal<f64>,
    /// Handle owning the pending animation delay; aborted on restart and
    /// unmount.
    pub run_abort_handle: RwSignal<Option<AbortHandle>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        is_animating: create_rw_signal(false),
        current_input_size: create_rw_signal(0),
        point_count: create_rw_signal(0),
        latest_sorting_cost: create_rw_signal(0.0),
        latest_queue_cost: create_rw_signal(0.0),
        run_abort_handle: create_rw_signal(None),
    })
}

global_signals! {
    pub is_animating => is_animating: bool,
    pub current_input_size => current_input_size: u32,
    pub point_count => point_count: usize,
    pub latest_sorting_cost => latest_sorting_cost: f64,
    pub latest_queue_cost => latest_queue_cost: f64,
    pub run_abort_handle => run_abort_handle: Option<AbortHandle>,
}
