use crate::app::state::ModalImage;
use crate::i18n::t;
use crate::paths::asset_path;
use crate::router::Language;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub language: Language,
    pub on_open_image: Callback<ModalImage>,
}

/// Share of each source modality in the benchmark, in percent.
const DISTRIBUTION: [(&str, &str, u8); 4] = [
    ("text", "histbench.distribution.label.text", 52),
    ("image", "histbench.distribution.label.image", 27),
    ("manuscript", "histbench.distribution.label.manuscript", 14),
    ("audio_video", "histbench.distribution.label.audio_video", 7),
];

#[derive(Properties, PartialEq, Clone)]
struct ChartProps {
    /// Part of the props so a locale switch re-renders the chart.
    language: Language,
}

/// Distribution chart with synchronized hover highlighting between the
/// bar segments and the table rows.
#[function_component(DistributionChart)]
fn distribution_chart(p: &ChartProps) -> Html {
    let hovered: UseStateHandle<Option<&'static str>> = use_state(|| None);

    let enter = |id: &'static str| {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(Some(id)))
    };
    let leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    let segment_class = |id: &str| -> String {
        match *hovered {
            Some(active) if active == id => "chart-segment highlight".to_string(),
            Some(_) => "chart-segment dimmed".to_string(),
            None => "chart-segment".to_string(),
        }
    };
    let row_class = |id: &str| -> &'static str {
        if *hovered == Some(id) {
            "highlight"
        } else {
            ""
        }
    };

    html! {
        <div class="distribution-container" data-testid="distribution-chart" data-lang={p.language.slug()}>
            <div class="distribution-bar" role="img" aria-label={t("histbench.distribution.title")}>
                { for DISTRIBUTION.iter().map(|(id, _, share)| html! {
                    <div
                        class={segment_class(id)}
                        data-id={*id}
                        style={format!("flex-basis:{share}%")}
                        onmouseenter={enter(id)}
                        onmouseleave={leave.clone()}
                    />
                }) }
            </div>
            <table class="distribution-table">
                <tbody>
                    { for DISTRIBUTION.iter().map(|(id, label_key, share)| html! {
                        <tr
                            class={row_class(id)}
                            data-id={*id}
                            onmouseenter={enter(id)}
                            onmouseleave={leave.clone()}
                        >
                            <td>{ t(label_key) }</td>
                            <td>{ format!("{share}%") }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
            <p class="chart-caption">{ t("histbench.distribution.caption") }</p>
        </div>
    }
}

#[function_component(HistBenchPage)]
pub fn histbench_page(p: &Props) -> Html {
    let figure_src = asset_path("resource/figures/difficulty_levels.png");
    let open_figure = {
        let cb = p.on_open_image.clone();
        let src = figure_src.clone();
        Callback::from(move |_: MouseEvent| {
            cb.emit(ModalImage {
                src: AttrValue::from(src.clone()),
                alt: AttrValue::from(t("histbench.difficulty_levels.img_alt")),
                caption: AttrValue::from(t("histbench.difficulty_levels.caption")),
            });
        })
    };

    html! {
        <div class="page histbench-page" data-testid="histbench-page">
            <h1>{ t("histbench.title") }</h1>

            <section>
                <h2>{ t("histbench.overview.title") }</h2>
                <p>{ t("histbench.overview.p1") }</p>
            </section>

            <section>
                <h2>{ t("histbench.reasoning_dimensions.title") }</h2>
                <p>{ t("histbench.reasoning_dimensions.p1") }</p>
                <ul>
                    <li>{ t("histbench.reasoning_dimensions.li.bibliographic") }</li>
                    <li>{ t("histbench.reasoning_dimensions.li.source_id") }</li>
                    <li>{ t("histbench.reasoning_dimensions.li.source_proc") }</li>
                    <li>{ t("histbench.reasoning_dimensions.li.hist_analysis") }</li>
                    <li>{ t("histbench.reasoning_dimensions.li.interdisciplinary") }</li>
                    <li>{ t("histbench.reasoning_dimensions.li.cultural_context") }</li>
                </ul>
            </section>

            <section>
                <h2>{ t("histbench.difficulty_levels.title") }</h2>
                <p>{ t("histbench.difficulty_levels.p1") }</p>
                <ul>
                    <li>{ t("histbench.difficulty_levels.li.basic") }</li>
                    <li>{ t("histbench.difficulty_levels.li.intermediate") }</li>
                    <li>{ t("histbench.difficulty_levels.li.challenging") }</li>
                </ul>
                <figure>
                    <img
                        class="modal-trigger-image"
                        src={figure_src.clone()}
                        alt={t("histbench.difficulty_levels.img_alt")}
                        onclick={open_figure}
                    />
                    <figcaption>{ t("histbench.difficulty_levels.caption") }</figcaption>
                </figure>
            </section>

            <section>
                <h2>{ t("histbench.distribution.title") }</h2>
                <DistributionChart language={p.language} />
            </section>
        </div>
    }
}
