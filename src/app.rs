use leptos::html::Canvas;
use leptos::*;
use std::rc::Rc;

use crate::domain::{
    chart::{Chart, ChartType},
    complexity::{CostSeriesKind, MAX_INPUT_SIZE, SamplePoint},
    logging::{LogComponent, get_logger, get_time_provider},
};
use crate::global_state::{
    current_input_size, is_animating, latest_queue_cost, latest_sorting_cost, point_count,
    run_abort_handle,
};
use crate::infrastructure::rendering::CanvasRenderer;
use crate::infrastructure::services::ConsoleLogger;
use crate::{application::AnimationLoop, log_debug};

const CANVAS_ID: &str = "complexity-canvas";
const CHART_WIDTH: u32 = 800;
const CHART_HEIGHT: u32 = 500;

// 🔗 Global signals for the debug console (bridge to domain::logging)
thread_local! {
    static GLOBAL_LOGS: RwSignal<Vec<String>> = create_rw_signal(Vec::new());
    static IS_LOG_PAUSED: RwSignal<bool> = create_rw_signal(false);
}

/// 🌉 Bridge logger: forwards domain log entries to the browser console and
/// mirrors them into Leptos signals for the on-page console.
pub struct LeptosLogger {
    console: ConsoleLogger,
}

impl LeptosLogger {
    pub fn new() -> Self {
        Self { console: ConsoleLogger::new_development() }
    }
}

impl Default for LeptosLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::domain::logging::Logger for LeptosLogger {
    fn log(&self, entry: crate::domain::logging::LogEntry) {
        let timestamp_str = get_time_provider().format_timestamp(entry.timestamp);
        let formatted =
            format!("[{}] {} {}: {}", timestamp_str, entry.level, entry.component, entry.message);

        GLOBAL_LOGS.with(|logs| {
            IS_LOG_PAUSED.with(|paused| {
                if !paused.get_untracked() {
                    logs.update(|log_vec| {
                        log_vec.push(formatted);
                        // Cap at 100 lines
                        while log_vec.len() > 100 {
                            log_vec.remove(0);
                        }
                    });
                }
            });
        });

        self.console.log(entry);
    }
}

/// 🦀 Root component of the complexity visualization
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .complexity-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
                min-height: 100vh;
                padding: 20px;
                color: white;
            }

            .header {
                text-align: center;
                margin-bottom: 20px;
                background: rgba(255, 255, 255, 0.1);
                backdrop-filter: blur(10px);
                padding: 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.2);
            }

            .run-info {
                display: flex;
                justify-content: center;
                gap: 40px;
                margin-top: 15px;
            }

            .run-item {
                text-align: center;
            }

            .run-value {
                font-size: 24px;
                font-weight: 700;
                color: #72c685;
                font-family: 'Courier New', monospace;
            }

            .run-label {
                font-size: 12px;
                color: #a0a0a0;
                margin-top: 5px;
            }

            .chart-container {
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 10px;
                margin-bottom: 20px;
            }

            .start-btn {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 10px 24px;
                border-radius: 8px;
                cursor: pointer;
                font-size: 15px;
            }

            .start-btn:disabled {
                opacity: 0.5;
                cursor: not-allowed;
            }

            .status {
                color: #72c685;
                font-size: 14px;
                text-align: center;
            }

            .summary-grid {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 16px;
                max-width: 820px;
                margin: 0 auto 20px auto;
                font-size: 14px;
            }

            .summary-card {
                padding: 16px;
                border-radius: 10px;
                background: rgba(0, 0, 0, 0.3);
                border-left: 4px solid;
            }

            .summary-title {
                font-weight: bold;
                margin-bottom: 8px;
            }

            .summary-ops {
                margin-top: 8px;
                font-family: 'Courier New', monospace;
            }

            .debug-console {
                background: rgba(0, 0, 0, 0.8);
                border-radius: 10px;
                padding: 15px;
                max-height: 300px;
                overflow-y: auto;
                border: 1px solid #4a5d73;
            }

            .debug-header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 10px;
                color: #72c685;
                font-weight: bold;
            }

            .debug-btn {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 5px 10px;
                border-radius: 5px;
                cursor: pointer;
                font-size: 12px;
                margin-left: 5px;
            }

            .debug-log {
                font-family: 'Courier New', monospace;
                font-size: 11px;
                line-height: 1.3;
            }

            .log-line {
                color: #e0e0e0;
                margin: 2px 0;
                padding: 1px 5px;
            }
            "#}
        </style>
        <div class="complexity-app">
            <Header />
            <ChartContainer />
            <SummaryPanels />
            <DebugConsole />
        </div>
    }
}

/// 📊 Header with live run counters
#[component]
fn Header() -> impl IntoView {
    view! {
        <div class="header">
            <h1>"Time Complexity Visualization"</h1>
            <p>"Sorting vs Priority Queue • Leptos + Canvas"</p>

            <div class="run-info">
                <div class="run-item">
                    <div class="run-value">
                        {move || current_input_size().get().to_string()}
                    </div>
                    <div class="run-label">"Current n"</div>
                </div>
                <div class="run-item">
                    <div class="run-value">
                        {move || format!("{}/{}", point_count().get(), MAX_INPUT_SIZE)}
                    </div>
                    <div class="run-label">"Points"</div>
                </div>
                <div class="run-item">
                    <div class="run-value">
                        {move || if is_animating().get() { "🟢 RUNNING" } else { "⚪ IDLE" }}
                    </div>
                    <div class="run-label">"Animation"</div>
                </div>
            </div>
        </div>
    }
}

/// 🎨 Canvas chart plus the start control
#[component]
fn ChartContainer() -> impl IntoView {
    let (points, set_points) = create_signal::<Vec<SamplePoint>>(Vec::new());
    let (renderer, set_renderer) = create_signal::<Option<Rc<CanvasRenderer>>>(None);
    let (status, set_status) = create_signal("Press start to generate the curves".to_string());

    let canvas_ref = create_node_ref::<Canvas>();

    // Create the renderer once the canvas is mounted.
    create_effect(move |_| {
        if canvas_ref.get().is_some() && renderer.get_untracked().is_none() {
            set_renderer.set(Some(Rc::new(CanvasRenderer::new(
                CANVAS_ID.to_string(),
                CHART_WIDTH,
                CHART_HEIGHT,
            ))));
        }
    });

    // Re-render whenever the accumulated points change.
    create_effect(move |_| {
        points.with(|point_data| {
            renderer.with(|renderer_opt| {
                if let Some(canvas_renderer) = renderer_opt {
                    let mut chart = Chart::new(
                        "complexity-chart".to_string(),
                        ChartType::Line,
                        CHART_WIDTH,
                        CHART_HEIGHT,
                    );
                    for point in point_data {
                        chart.add_point(*point);
                    }

                    if let Err(e) = canvas_renderer.render_chart(&chart) {
                        set_status.set(format!("❌ Render error: {}", e));
                    } else if chart.has_data() {
                        set_status.set(format!(
                            "Rendered {} of {} points",
                            chart.point_count(),
                            MAX_INPUT_SIZE
                        ));
                    }
                }
            });
        });
    });

    // Unmount clears the pending timer.
    on_cleanup(|| abort_pending_run());

    view! {
        <div class="chart-container">
            <button
                class="start-btn"
                prop:disabled=move || is_animating().get()
                on:click=move |_| start_animation(set_points, set_status)
            >
                {move || if is_animating().get() { "Visualizing..." } else { "Start Visualization" }}
            </button>
            <canvas
                id=CANVAS_ID
                node_ref=canvas_ref
                width=CHART_WIDTH
                height=CHART_HEIGHT
                style="border: 2px solid #4a5d73; border-radius: 10px; background: #1a1a2e;"
            />
            <div class="status">
                {move || status.get()}
            </div>
        </div>
    }
}

/// 📋 Per-strategy summary cards with the most recent operation counts
#[component]
fn SummaryPanels() -> impl IntoView {
    let card = |kind: CostSeriesKind| {
        let color = crate::domain::chart::Color::from_hex(kind.color_hex()).to_css();
        let ops = move || match kind {
            CostSeriesKind::Sorting => latest_sorting_cost().get(),
            CostSeriesKind::PriorityQueue => latest_queue_cost().get(),
        };
        view! {
            <div class="summary-card" style:border-left-color=color.clone()>
                <div class="summary-title" style:color=color>{kind.to_string()}</div>
                <p>{kind.summary()}</p>
                <p class="summary-ops">
                    {move || format!("Current operations: {:.2}", ops())}
                </p>
            </div>
        }
    };

    view! {
        <div class="summary-grid">
            {card(CostSeriesKind::Sorting)}
            {card(CostSeriesKind::PriorityQueue)}
        </div>
    }
}

/// 🎯 Debug console bridged to domain::logging
#[component]
fn DebugConsole() -> impl IntoView {
    let logs = GLOBAL_LOGS.with(|logs| *logs);
    let is_paused = IS_LOG_PAUSED.with(|paused| *paused);

    view! {
        <div class="debug-console">
            <div class="debug-header">
                <span>"🐛 Domain Logger Console"</span>
                <span>
                    <button
                        on:click=move |_| {
                            is_paused.update(|p| *p = !*p);
                            let message = if is_paused.get_untracked() {
                                "🛑 Logging paused"
                            } else {
                                "▶️ Logging resumed"
                            };
                            get_logger().info(LogComponent::Presentation("DebugConsole"), message);
                        }
                        class="debug-btn"
                    >
                        {move || if is_paused.get() { "▶️ Resume" } else { "⏸️ Pause" }}
                    </button>
                    <button
                        on:click=move |_| {
                            GLOBAL_LOGS.with(|logs| logs.set(Vec::new()));
                            get_logger().info(
                                LogComponent::Presentation("DebugConsole"),
                                "🗑️ Log history cleared",
                            );
                        }
                        class="debug-btn"
                    >
                        "🗑️ Clear"
                    </button>
                </span>
            </div>
            <div class="debug-log">
                <For
                    each=move || logs.get()
                    key=|log| log.clone()
                    children=move |log| {
                        view! { <div class="log-line">{log}</div> }
                    }
                />
            </div>
        </div>
    }
}

/// Abort whichever delay is currently scheduled, if any, and drop the
/// running flag so a remounted app starts from idle.
pub fn abort_pending_run() {
    run_abort_handle().update(|slot| {
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    });
    is_animating().set(false);
}

/// 🎬 Kick off one animation run; ignored while a run is in flight.
fn start_animation(set_points: WriteSignal<Vec<SamplePoint>>, set_status: WriteSignal<String>) {
    if is_animating().get_untracked() {
        log_debug!(LogComponent::Presentation("Chart"), "Start ignored: run already in flight");
        return;
    }

    // Restart: the pending step of any previous run dies before state resets.
    let had_output = point_count().get_untracked() > 0;
    abort_pending_run();
    if had_output {
        AnimationLoop::log_restart();
    }
    set_points.set(Vec::new());
    current_input_size().set(0);
    point_count().set(0);
    latest_sorting_cost().set(0.0);
    latest_queue_cost().set(0.0);
    is_animating().set(true);
    set_status.set("Visualizing...".to_string());

    let handle = AnimationLoop::spawn(
        move |point| {
            current_input_size().set(point.n.value());
            latest_sorting_cost().set(point.sorting_cost.value());
            latest_queue_cost().set(point.priority_queue_cost.value());
            set_points.update(|pts| {
                pts.push(point);
                point_count().set(pts.len());
            });
        },
        move |count| {
            is_animating().set(false);
            run_abort_handle().set(None);
            set_status.set(format!("Done: {} points generated", count));
        },
    );

    run_abort_handle().set(Some(handle));
}
