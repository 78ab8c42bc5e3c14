use leptos::ev::MouseEvent;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::effects;
use crate::stats;
use crate::timer::ScreenTimer;
use crate::types::{ExerciseParams, ExerciseRecord, SetEntry, SetLabel, StatsSummary};

const PULSE_MS: u32 = 400;

/// Chronometer display: minutes are unbounded, seconds always two digits.
pub fn format_clock(secs: i64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub fn format_weight(w: f64) -> String {
    if w.fract() == 0.0 {
        format!("{:.0}", w)
    } else {
        format!("{:.1}", w)
    }
}

/// The whole screen lives inside one closure over the record signal, so any
/// change to the record rebuilds every section and re-binds every listener.
/// The timer ticks through its own signal and leaves the subtree alone.
#[component]
pub fn ExerciseScreen(
    record: RwSignal<Option<ExerciseRecord>>,
    timer: ScreenTimer,
) -> impl IntoView {
    let (volume_pulse, set_volume_pulse) = create_signal(false);

    let advance_set = {
        let timer = timer.clone();
        move |set_id: u32, row: Option<web_sys::HtmlElement>| {
            let known = record.with_untracked(|rec| {
                rec.as_ref()
                    .map(|r| r.sets.iter().any(|s| s.id == set_id))
                    .unwrap_or(false)
            });
            if !known {
                // stale id after a data swap: ignore the tap
                web_sys::console::log_1(&format!("No set with id {}, ignoring tap", set_id).into());
                return;
            }

            record.update(|rec| {
                if let Some(rec) = rec.as_mut() {
                    if let Some(set) = rec.sets.iter_mut().find(|s| s.id == set_id) {
                        set.state = set.state.advanced();
                    }
                    stats::refresh_summary(rec);
                }
            });

            set_volume_pulse.set(true);
            gloo_timers::callback::Timeout::new(PULSE_MS, move || {
                set_volume_pulse.set(false);
            })
            .forget();

            if let Some(row) = row {
                effects::spawn_burst(&row);
            }

            let all_done = record.with_untracked(|rec| {
                rec.as_ref()
                    .map(|r| stats::all_sets_complete(&r.sets))
                    .unwrap_or(false)
            });
            if all_done && !timer.is_running() {
                timer.start();
            }
        }
    };

    let timer_view = timer.clone();

    view! {
        <div class="exercise-screen">
            {move || {
                let advance = advance_set.clone();
                let timer = timer_view.clone();
                record.get().map(|rec| {
                    let total_sets = rec.sets.len();
                    view! {
                        {header_view(&rec)}
                        {metrics_grid(&rec.params)}
                        <RingsSection
                            gif_url=rec.gif_url.clone()
                            name=rec.name.clone()
                            weight_default=rec.params.weight_default
                            reps_per_set=rec.params.reps_per_set
                        />
                        <div class="series-list">
                            {rec
                                .sets
                                .iter()
                                .map(|set| {
                                    let advance = advance.clone();
                                    set_row(set, advance)
                                })
                                .collect_view()}
                        </div>
                        {bottom_stats(&rec.stats, total_sets, &timer, volume_pulse)}
                    }
                })
            }}
        </div>
    }
}

fn header_view(record: &ExerciseRecord) -> impl IntoView {
    view! {
        <div class="exercise-header">
            <div class="exercise-header-icon">"🏆"</div>
            <div class="exercise-header-info">
                <h1 class="exercise-name">{record.name.clone()}</h1>
                <p class="exercise-category">{record.category.clone()}</p>
            </div>
        </div>
    }
}

fn metrics_grid(params: &ExerciseParams) -> impl IntoView {
    let cards = [
        (
            "⚖️",
            "POIDS",
            format!("{}kg", format_weight(params.weight_default)),
            "orange",
        ),
        (
            "🔢",
            "SERIES",
            format!("{}x{}", params.sets_total, params.reps_per_set),
            "cyan",
        ),
        ("⚡", "TEMPO", params.tempo.clone(), "green"),
        ("⏱", "REPOS", format!("{}s", params.rest_seconds), "violet"),
    ];

    view! {
        <div class="metrics-grid">
            {cards
                .into_iter()
                .map(|(icon, label, value, color)| {
                    view! {
                        <div class=format!("metric-card glow-{}", color)>
                            <div class="metric-icon">{icon}</div>
                            <div class="metric-value">{value}</div>
                            <div class="metric-label">{label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Purely presentational three-part ring layout. Each instantiation seeds
/// the container with a fresh batch of ambient particles.
#[component]
fn RingsSection(
    gif_url: String,
    name: String,
    weight_default: f64,
    reps_per_set: u32,
) -> impl IntoView {
    let rings_ref = create_node_ref::<html::Div>();

    #[cfg(target_arch = "wasm32")]
    create_effect(move |_| {
        if let Some(container) = rings_ref.get() {
            effects::spawn_ambient(&container);
        }
    });

    view! {
        <div class="rings-section">
            <div class="rings-container" node_ref=rings_ref>
                <div class="circle-outer">
                    <div class="checkmark">"✓"</div>
                </div>
                <div class="circle-center">
                    <div class="exercise-gif">
                        <img src=gif_url alt=name/>
                    </div>
                    <div class="weight-value">{format_weight(weight_default)}</div>
                    <div class="weight-unit">"kg"</div>
                </div>
                <div class="circle-right">
                    <div class="reps-value">{reps_per_set}</div>
                    <div class="reps-label">"reps"</div>
                </div>
            </div>
        </div>
    }
}

fn set_row(
    set: &SetEntry,
    on_advance: impl Fn(u32, Option<web_sys::HtmlElement>) + Clone + 'static,
) -> impl IntoView {
    let set_id = set.id;

    let center = match set.center_label() {
        SetLabel::DropSet => view! {
            <span class="technique-badge badge-cyan">"DROP SET"</span>
        }
        .into_view(),
        SetLabel::RestPause => view! {
            <span class="technique-badge badge-violet">"REST PAUSE"</span>
        }
        .into_view(),
        SetLabel::Weight(w) => view! {
            <span class="set-value">{format!("{} kg", format_weight(w))}</span>
        }
        .into_view(),
    };

    view! {
        <div
            class=format!("set-row state-{}", set.state.as_str())
            data-set-id=set_id.to_string()
            on:click=move |ev: MouseEvent| {
                let row = ev
                    .current_target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok());
                on_advance(set_id, row);
            }
        >
            <div class="set-circle-left">
                <div class="set-weight">{format_weight(set.weight)}</div>
                <div class="set-unit">"kg"</div>
            </div>
            <div class="set-info">{center}</div>
            <div class="set-reps-text">{format!("{} reps", set.reps)}</div>
            <div class="set-checkbox"></div>
        </div>
    }
}

fn bottom_stats(
    summary: &StatsSummary,
    total_sets: usize,
    timer: &ScreenTimer,
    volume_pulse: ReadSignal<bool>,
) -> impl IntoView {
    let elapsed = timer.elapsed();

    view! {
        <div class="bottom-stats">
            <div class="stat-chrono">
                <div class="stat-label">"CHRONO"</div>
                <div class="stat-timer">{move || format_clock(elapsed.get())}</div>
            </div>
            <div class="stat-progress">
                <div class="stat-label">"Progression"</div>
                <div class="stat-value">
                    {format!("{} / {} séries", summary.completed_sets, total_sets)}
                </div>
            </div>
            <div class="stat-volume">
                <div class="stat-volume-value" class:pulse=move || volume_pulse.get()>
                    {format!(
                        "{}/{} KG",
                        format_weight(summary.current_volume),
                        format_weight(summary.volume_target),
                    )}
                </div>
            </div>
        </div>
    }
}
