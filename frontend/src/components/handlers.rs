use super::toast::Notice;
use super::utils::{first_file, generate_id};
use crate::dashboard::{Dashboard, Msg, UploadedImage};
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::future::TimeoutFuture;
use shared::prediction::total_probability;
use shared::upload::accepts_result;
use shared::{ImageInfo, Intake};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

pub fn handle_file_chosen(
    model: &mut Dashboard,
    ctx: &Context<Dashboard>,
    file: GlooFile,
    intake: Intake,
) -> bool {
    let config = &ctx.props().config;
    let info = ImageInfo::new(file.name(), file.raw_mime_type(), file.size());

    if let Err(e) = info.validate(config.max_upload_bytes, intake) {
        log::warn!("Rejected upload {}: {}", info.name, e);
        ctx.props().on_notify.emit(Notice::error(e.to_string()));
        return false;
    }

    let id = generate_id();
    log::info!("Analyzing {} ({} bytes) as image {}", info.name, info.size, id);

    let preview_url = ObjectUrl::from(file.clone());
    model.image = Some(UploadedImage {
        id,
        file,
        info,
        preview_url,
    });
    model.results = None;
    model.loading = true;

    schedule_analysis(ctx, id, config.analysis_delay_ms);
    true
}

/// Delivers `AnalysisReady` once the simulated model latency has elapsed.
fn schedule_analysis(ctx: &Context<Dashboard>, image_id: u64, delay_ms: u32) {
    let link = ctx.link().clone();
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        link.send_message(Msg::AnalysisReady(image_id));
    });
}

pub fn handle_analysis_ready(
    model: &mut Dashboard,
    ctx: &Context<Dashboard>,
    image_id: u64,
) -> bool {
    let current = model.image.as_ref().map(|image| image.id);
    if !accepts_result(current, image_id) {
        log::debug!("Dropping stale analysis for image {}", image_id);
        return false;
    }
    let Some(image) = model.image.as_ref() else {
        return false;
    };

    let predictions = model.predictor.predict(&image.info);
    log::info!(
        "Analysis finished for {} ({} labels, total {:.6})",
        image.info.name,
        predictions.len(),
        total_probability(&predictions)
    );

    model.results = Some(predictions);
    model.loading = false;
    ctx.props()
        .on_notify
        .emit(Notice::success("Analysis completed successfully!"));
    true
}

pub fn handle_drop(model: &mut Dashboard, ctx: &Context<Dashboard>, event: DragEvent) -> bool {
    event.prevent_default();
    event.stop_propagation();
    model.is_dragging = false;

    if let Some(file) = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_file(&file_list))
    {
        ctx.link().send_message(Msg::FileChosen(file, Intake::Dropped));
    }

    true
}

pub fn handle_paste(
    _model: &mut Dashboard,
    ctx: &Context<Dashboard>,
    event: ClipboardEvent,
) -> bool {
    if let Some(file) = event
        .clipboard_data()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_file(&file_list))
    {
        event.prevent_default();
        ctx.link().send_message(Msg::FileChosen(file, Intake::Pasted));
    }
    false
}
