use shared::Route;
use yew::prelude::*;

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "🍎",
        "Multi-class Fruit Classification",
        "Detect multiple fruit types and their ripeness status from a single image with high accuracy.",
    ),
    (
        "📊",
        "Visual Analytics",
        "Comprehensive performance metrics including precision, recall, F1-score and confusion matrices.",
    ),
    (
        "🖥️",
        "User-friendly Interface",
        "Simple drag-and-drop interface for uploading images and getting instant ripeness results.",
    ),
    (
        "🔍",
        "Model Transparency",
        "Visualize what the AI is focusing on and understand the confidence of each prediction.",
    ),
    (
        "📦",
        "Batch Processing",
        "Process multiple images at once to save time during large harvests or inventory checks.",
    ),
    (
        "📝",
        "Detailed Reporting",
        "Generate customizable reports with ripeness distribution and quality metrics.",
    ),
];

pub fn render_landing() -> Html {
    html! {
        <>
            <section class="hero">
                <h1>{"Advanced Fruit Ripeness Detection"}</h1>
                <p class="subtitle">
                    {"Leverage AI to instantly detect the ripeness of fruits with high accuracy. \
                      Optimize your harvest time, reduce waste, and ensure premium quality."}
                </p>
                <div class="button-container">
                    <a class="analyze-btn" href={Route::Dashboard.hash()}>{"Try Detection"}</a>
                    <a class="analyze-btn outline" href={Route::About.hash()}>{"Learn More"}</a>
                </div>
            </section>

            <section class="features">
                <h2>{"Advanced Features"}</h2>
                <p class="subtitle">
                    {"Our fruit ripeness detection system provides powerful tools for farmers, \
                      retailers, and researchers."}
                </p>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|(icon, title, description)| html! {
                        <div class="card feature-card" key={title.to_string()}>
                            <div class="feature-icon">{ *icon }</div>
                            <h3>{ *title }</h3>
                            <p>{ *description }</p>
                        </div>
                    }) }
                </div>
            </section>
        </>
    }
}
