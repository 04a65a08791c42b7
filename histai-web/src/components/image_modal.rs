use crate::app::state::ModalImage;
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub image: Option<ModalImage>,
    pub on_close: Callback<()>,
}

/// Click-to-enlarge lightbox for the sample-question figures.
///
/// Closes on the close button, a backdrop click, or Escape.
#[function_component(ImageModal)]
pub fn image_modal(props: &Props) -> Html {
    let Some(image) = props.image.as_ref() else {
        return Html::default();
    };

    let on_backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };

    html! {
        <div
            class="image-modal"
            role="dialog"
            aria-modal="true"
            aria-labelledby="modal-caption"
            onclick={on_backdrop}
            onkeydown={on_keydown}
            tabindex="-1"
        >
            <button
                type="button"
                class="close-modal-btn"
                aria-label={t("image_modal.close")}
                onclick={on_close}
            >
                { "×" }
            </button>
            <img
                class="modal-image-content"
                src={image.src.clone()}
                alt={if image.alt.is_empty() {
                    AttrValue::from(t("image_modal.default_alt"))
                } else {
                    image.alt.clone()
                }}
            />
            <div id="modal-caption" class="modal-caption">{ image.caption.clone() }</div>
        </div>
    }
}
