use shared::metrics::{
    self, CLASS_DISTRIBUTION, CLASS_METRICS, CONFUSION_MATRIX, DATASET, TRAINING_HISTORY,
};
use shared::prediction::{palette_color, Ripeness};
use strum::IntoEnumIterator;
use yew::prelude::*;

fn render_stat(label: &str, value: f64) -> Html {
    html! {
        <div class="card stat-card">
            <p class="stat-label">{ label }</p>
            <p class="stat-value">{ format!("{:.1}%", value * 100.0) }</p>
        </div>
    }
}

fn render_bar(value: f64, color: &str) -> Html {
    html! {
        <div class="result-bar-container">
            <div class="result-bar" style={format!("width: {}%; background-color: {};", value * 100.0, color)}></div>
        </div>
    }
}

pub fn render_analytics() -> Html {
    let summary = metrics::summary(&CLASS_METRICS);
    let recall = metrics::per_class_recall(&CONFUSION_MATRIX);
    let distribution_total: u32 = CLASS_DISTRIBUTION.iter().map(|(_, n)| n).sum();

    html! {
        <div class="analytics">
            <h2>{"Model Performance Metrics"}</h2>
            <div class="stat-grid">
                { render_stat("Average Precision", summary.precision) }
                { render_stat("Average Recall", summary.recall) }
                { render_stat("Average F1", summary.f1) }
                { render_stat("Overall Accuracy", summary.accuracy) }
            </div>

            <h3>{"Per-class Metrics"}</h3>
            <table class="metrics-table">
                <thead>
                    <tr><th>{"Class"}</th><th>{"Precision"}</th><th>{"Recall"}</th><th>{"F1"}</th><th>{"Accuracy"}</th></tr>
                </thead>
                <tbody>
                    { for CLASS_METRICS.iter().map(|m| html! {
                        <tr>
                            <td>{ m.class.to_string() }</td>
                            <td>{ format!("{:.2}", m.precision) }</td>
                            <td>{ format!("{:.2}", m.recall) }</td>
                            <td>{ format!("{:.2}", m.f1) }</td>
                            <td>{ format!("{:.2}", m.accuracy) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>

            <h3>{"Confusion Matrix"}</h3>
            <table class="metrics-table confusion">
                <thead>
                    <tr>
                        <th>{"Actual \\ Predicted"}</th>
                        { for Ripeness::iter().map(|r| html! { <th>{ r.to_string() }</th> }) }
                        <th>{"Recall"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for Ripeness::iter().zip(CONFUSION_MATRIX.iter()).zip(recall.iter()).map(|((actual, row), r)| html! {
                        <tr>
                            <th>{ actual.to_string() }</th>
                            { for row.iter().map(|count| html! { <td>{ *count }</td> }) }
                            <td>{ format!("{:.1}%", r * 100.0) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>

            <h3>{"Training History"}</h3>
            <table class="metrics-table">
                <thead>
                    <tr><th>{"Epoch"}</th><th>{"Train Acc"}</th><th>{"Val Acc"}</th><th>{"Train Loss"}</th><th>{"Val Loss"}</th></tr>
                </thead>
                <tbody>
                    { for TRAINING_HISTORY.iter().map(|e| html! {
                        <tr>
                            <td>{ e.epoch }</td>
                            <td>{ format!("{:.2}", e.train_acc) }</td>
                            <td>{ format!("{:.2}", e.val_acc) }</td>
                            <td>{ format!("{:.2}", e.train_loss) }</td>
                            <td>{ format!("{:.2}", e.val_loss) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>

            <h3>{"Class Distribution"}</h3>
            <div class="result-bars">
                { for CLASS_DISTRIBUTION.iter().enumerate().map(|(i, (class, count))| {
                    let share = f64::from(*count) / f64::from(distribution_total.max(1));
                    html! {
                        <div class="result-item">
                            <div class="result-label">{ class.to_string() }</div>
                            { render_bar(share, palette_color(i)) }
                            <div class="result-value">{ *count }</div>
                        </div>
                    }
                }) }
            </div>

            <div class="stat-grid">
                <div class="card stat-card"><p class="stat-label">{"Total training images"}</p><p class="stat-value">{ DATASET.training }</p></div>
                <div class="card stat-card"><p class="stat-label">{"Total validation images"}</p><p class="stat-value">{ DATASET.validation }</p></div>
                <div class="card stat-card"><p class="stat-label">{"Total test images"}</p><p class="stat-value">{ DATASET.test }</p></div>
            </div>
        </div>
    }
}
