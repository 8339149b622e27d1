use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AboutTab {
    Technology,
    Team,
    Faq,
}

const TEAM: [(&str, &str, &str); 4] = [
    (
        "Dr. Sarah Johnson",
        "Machine Learning Lead",
        "PhD in Computer Vision with 10+ years experience in agricultural AI applications.",
    ),
    (
        "Michael Chen",
        "Full-Stack Developer",
        "Builds the web client and its tooling, with a background in agricultural technology.",
    ),
    (
        "Dr. James Rodriguez",
        "Agricultural Scientist",
        "Specializes in post-harvest technology and fruit physiology.",
    ),
    (
        "Lisa Patel",
        "UI/UX Designer",
        "Creates intuitive interfaces for technical applications with focus on accessibility.",
    ),
];

const FAQ: [(&str, &str); 4] = [
    (
        "What types of fruits can the system detect?",
        "Currently, our system can detect ripeness for apples, bananas, oranges, strawberries, \
         and mangoes. We are continuously expanding our dataset to include more fruit types.",
    ),
    (
        "How accurate is the ripeness detection?",
        "Our system achieves an average accuracy of 94% across all supported fruit types. \
         The precision and recall metrics are available in the dashboard for transparency.",
    ),
    (
        "Can I use this for commercial purposes?",
        "Yes, we offer different subscription plans for commercial use. Please contact our \
         sales team for more information on enterprise licensing.",
    ),
    (
        "Does the system work offline?",
        "We offer an offline version for enterprise customers that can be deployed on local \
         hardware.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    let tab = use_state(|| AboutTab::Technology);

    let tab_button = |target: AboutTab, label: &str| {
        let tab = tab.clone();
        let active = *tab == target;
        html! {
            <button
                class={classes!("tab", active.then_some("active"))}
                onclick={Callback::from(move |_: MouseEvent| tab.set(target))}
            >
                { label }
            </button>
        }
    };

    let body = match *tab {
        AboutTab::Technology => html! {
            <div class="card">
                <h2>{"How it Works"}</h2>
                <h3>{"Deep Learning Model"}</h3>
                <p>
                    {"We utilize an EfficientNet architecture pre-trained on ImageNet and fine-tuned \
                      on our specialized fruit dataset."}
                </p>
                <h3>{"Image Processing"}</h3>
                <p>
                    {"Before classification, images undergo preprocessing including normalization \
                      and resizing to ensure consistent inputs regardless of the camera used."}
                </p>
                <h3>{"Performance Metrics"}</h3>
                <p>
                    {"Accuracy, precision, recall, F1-score and confusion matrices are displayed \
                      in the dashboard."}
                </p>
            </div>
        },
        AboutTab::Team => html! {
            <div class="card team-grid">
                { for TEAM.iter().map(|(name, role, bio)| html! {
                    <div class="team-member" key={name.to_string()}>
                        <h3>{ *name }</h3>
                        <p class="role">{ *role }</p>
                        <p>{ *bio }</p>
                    </div>
                }) }
            </div>
        },
        AboutTab::Faq => html! {
            <div class="card">
                { for FAQ.iter().map(|(question, answer)| html! {
                    <div class="faq-item" key={question.to_string()}>
                        <h3>{ *question }</h3>
                        <p>{ *answer }</p>
                    </div>
                }) }
            </div>
        },
    };

    html! {
        <section class="about">
            <h1>{"About FruitVision"}</h1>
            <p>
                {"FruitVision is a fruit ripeness detection system that helps farmers, retailers, \
                  and consumers identify whether fruit is unripe, ripe, or overripe."}
            </p>
            <div class="tabs">
                { tab_button(AboutTab::Technology, "Technology") }
                { tab_button(AboutTab::Team, "Our Team") }
                { tab_button(AboutTab::Faq, "FAQ") }
            </div>
            { body }
        </section>
    }
}
