//! Image file picker for identity and land verification photos.

use cropshield_core::Attachment;
use cropshield_ui::{Button, ButtonVariant};
use dioxus::prelude::*;
use rfd::FileDialog;

#[component]
pub fn ImagePicker(
    label: String,
    /// Called with the chosen image, or `None` when cleared
    on_pick: EventHandler<Option<Attachment>>,
) -> Element {
    let mut picking = use_signal(|| false);
    let mut chosen: Signal<Option<String>> = use_signal(|| None);
    let mut error = use_signal(|| Option::<String>::None);

    let title = label.clone();
    let pick = move |_| {
        let title = title.clone();
        picking.set(true);
        error.set(None);

        spawn(async move {
            // Dialog and file read both block
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg"])
                    .set_title(title.as_str())
                    .pick_file()
                    .map(Attachment::from_path)
            })
            .await;

            match picked {
                Ok(Some(Ok(attachment))) => {
                    chosen.set(Some(attachment.file_name().to_string()));
                    on_pick.call(Some(attachment));
                }
                Ok(Some(Err(e))) => error.set(Some(e.to_string())),
                Ok(None) => {}
                Err(e) => error.set(Some(format!("File picker error: {}", e))),
            }
            picking.set(false);
        });
    };

    let clear = move |_| {
        chosen.set(None);
        on_pick.call(None);
    };

    rsx! {
        div { class: "form-field image-picker",
            span { class: "input-label", "{label}" }
            div { class: "image-picker-row",
                Button {
                    variant: ButtonVariant::Secondary,
                    busy: picking(),
                    busy_label: "Choosing…".to_string(),
                    onclick: pick,
                    "Choose image"
                }
                if let Some(name) = chosen() {
                    span { class: "image-picker-name", "{name}" }
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: clear,
                        "remove"
                    }
                }
            }
            if let Some(err) = error() {
                span { class: "input-warning", "{err}" }
            }
        }
    }
}
