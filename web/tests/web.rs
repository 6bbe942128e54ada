#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use trivia_web::game::{GameProps, GameView};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount() -> Element {
    let document = gloo::utils::document();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    let props = GameProps {
        seed: Some(1),
        endpoint: "http://127.0.0.1:9".to_string(),
        loading_delay: 60_000,
    };
    yew::Renderer::<GameView>::with_root_and_props(root.clone(), props).render();
    root
}

async fn settle() {
    yew::platform::time::sleep(Duration::from_millis(10)).await;
}

#[wasm_bindgen_test]
async fn initial_page_has_start_button_and_empty_board() {
    let root = mount();
    settle().await;

    let button = root.query_selector("#start").unwrap().unwrap();
    assert_eq!(button.text_content().unwrap(), "Start");
    assert!(root.query_selector("table.board thead th").unwrap().is_none());
    assert!(root.query_selector("tbody td").unwrap().is_none());
    assert!(root.query_selector(".loading").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn start_shows_loading_indicator() {
    let root = mount();
    settle().await;

    let button: HtmlElement = root
        .query_selector("#start")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    button.click();
    settle().await;

    assert!(root.query_selector(".loading").unwrap().is_some());
    assert!(root.query_selector("tbody td").unwrap().is_none());
}
