use super::utils::{debounce, first_file, render_spinner};
use crate::dashboard::{Dashboard, Msg};
use shared::Intake;
use shared::upload::display_name;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Dashboard, ctx: &Context<Dashboard>) -> Html {
    let link = ctx.link();
    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_file);

        input.set_value("");
        file.map(|file| Msg::FileChosen(file, Intake::Picked))
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        e.stop_propagation();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("file-input"))
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <div class="card upload-section">
            <input
                type="file"
                id="file-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!(
                    "upload-area",
                    model.is_dragging.then_some("drag-over"),
                    model.image.is_some().then_some("has-preview"),
                )}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
            >
                {
                    match &model.image {
                        Some(image) => html! {
                            <div class="preview-container">
                                <img id="actual-image-preview" src={image.preview_url.to_string()} alt="Preview" />
                                <p class="file-name" title={image.info.name.clone()}>{ display_name(&image.info.name, 24) }</p>
                                <div class="button-container">
                                    <button
                                        class="analyze-btn outline"
                                        disabled={model.loading}
                                        onclick={debounce(300, {
                                            let trigger_file_input = trigger_file_input.clone();
                                            move || trigger_file_input.emit(())
                                        })}
                                    >
                                        <i class="fa-solid fa-rotate"></i>{" Change Image"}
                                    </button>
                                    { if model.loading { render_spinner(Some("Processing...")) } else { html! {} } }
                                </div>
                            </div>
                        },
                        None => html! {
                            <div class="upload-placeholder">
                                <i class="fa-solid fa-cloud-arrow-up"></i>
                                <p>{"Drag and drop image"}</p>
                                <p class="file-types">{"or click to browse, or paste from the clipboard"}</p>
                                <p class="file-types">{ format!("Images up to {}", ctx.props().config.max_upload_label()) }</p>
                                <button
                                    id="upload-button"
                                    class="analyze-btn"
                                    disabled={model.loading}
                                    onclick={debounce(300, {
                                        let trigger_file_input = trigger_file_input.clone();
                                        move || trigger_file_input.emit(())
                                    })}
                                >
                                    <i class="fa-solid fa-upload"></i>{" Select Image"}
                                </button>
                            </div>
                        },
                    }
                }
            </div>
        </div>
    }
}
