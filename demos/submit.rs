use pressable::prelude::*;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tracing_subscriber::EnvFilter;

#[component]
fn SubmitButton(props: &ButtonProps) -> Node {
    button(props.clone())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let submissions = Arc::new(AtomicUsize::new(0));

    let element = element! {
        SubmitButton(
            r#type: ButtonType::Submit,
            aria_label: "Submit the form".to_string(),
            on_click: {
                let submissions = submissions.clone();
                move |event: ClickEvent| {
                    let n = submissions.fetch_add(1, Ordering::SeqCst) + 1;
                    tracing::info!(?event, n, "submitted");
                }
            },
        ) {
            "Submit"
        }
    };

    let node = element.render();
    println!("{}", node.to_pretty_string().trim_end());

    node.dispatch(&ControlEvent::mouse(
        MouseEventKind::Down(MouseButton::Left),
        2,
        0,
    ));
    node.dispatch(&ControlEvent::key(KeyEventKind::Press, KeyCode::Enter));

    let disabled = element! {
        Button(disabled: true) {
            "Submit"
        }
    }
    .render();
    disabled.dispatch(&ControlEvent::key(KeyEventKind::Press, KeyCode::Enter));
    println!("{}", disabled);

    println!("submitted {} times", submissions.load(Ordering::SeqCst));
    element.write(std::io::stdout())?;
    println!();
    Ok(())
}
