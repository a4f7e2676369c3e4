use complexity_chart_wasm::app::abort_pending_run;
use complexity_chart_wasm::global_state::{is_animating, run_abort_handle};
use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::sleep;
use leptos::*;
use std::time::Duration;
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test(async)]
async fn restart_aborts_pending_step() {
    let (handle, registration) = AbortHandle::new_pair();
    run_abort_handle().set(Some(handle));

    let pending = Abortable::new(sleep(Duration::from_millis(50)), registration);
    abort_pending_run();

    assert!(pending.await.is_err());
    assert!(run_abort_handle().get_untracked().is_none());
}

#[wasm_bindgen_test(unsupported = test)]
fn cleanup_resets_animation_flag() {
    let (handle, _registration) = AbortHandle::new_pair();
    run_abort_handle().set(Some(handle));
    is_animating().set(true);

    abort_pending_run();

    assert!(!is_animating().get_untracked());
    assert!(run_abort_handle().get_untracked().is_none());
}

#[wasm_bindgen_test(async)]
async fn abort_without_pending_run_is_harmless() {
    run_abort_handle().set(None);
    abort_pending_run();
    assert!(run_abort_handle().get_untracked().is_none());
}
