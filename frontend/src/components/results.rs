use crate::dashboard::Dashboard;
use shared::prediction::{palette_color, sorted_by_probability, top_prediction};
use yew::prelude::*;

pub fn render_results(model: &Dashboard) -> Html {
    let (Some(image), Some(results)) = (&model.image, &model.results) else {
        return html! {
            <div class="card no-results">
                <i class="fa-solid fa-file-lines fa-2x"></i>
                <h3>{"No results yet"}</h3>
                <p>{"Upload an image to see the AI analysis of fruit ripeness"}</p>
            </div>
        };
    };

    let sorted = sorted_by_probability(results);
    let top_label = top_prediction(results).map(|p| p.label.clone()).unwrap_or_default();
    let analyzed_filename = image.file.name();

    html! {
        <div class="card results-container">
            <div class="result-header">
                <h2 title={format!("Analysis results for: {}", analyzed_filename)}>
                    {"Prediction Results"}
                    <span class="analyzed-filename-display">{ format!("({})", analyzed_filename) }</span>
                </h2>
                <p class="subtitle">{"Analysis of fruit ripeness"}</p>
            </div>

            <div class="result-preview">
                <img src={image.preview_url.to_string()} alt="Analyzed fruit" />
                <div class="top-label">{ top_label }</div>
            </div>

            <div class="detailed-results">
                <h3>{"Detailed Results"}</h3>
                <div class="result-bars">
                    { for sorted.iter().enumerate().map(|(i, prediction)| {
                        let color = palette_color(i);
                        let percentage = prediction.percentage();
                        html! {
                            <div class="result-item" key={prediction.label.clone()}>
                                <span class="color-dot" style={format!("background-color: {};", color)}></span>
                                <div class="result-label">{ &prediction.label }</div>
                                <div class="result-bar-container">
                                    <div class="result-bar" style={format!("width: {}%; background-color: {};", percentage, color)}></div>
                                </div>
                                <div class="result-value">{ format!("{:.2}%", percentage) }</div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}
