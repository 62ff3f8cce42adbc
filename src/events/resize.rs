use super::Listener;
use crate::constants::EVENT_RESIZE;
use web_sys as web;

pub fn wire_resize(
    window: &web::Window,
    mut on_resize: impl FnMut() + 'static,
) -> anyhow::Result<Listener> {
    Listener::attach(window, EVENT_RESIZE, move |_ev: web::Event| on_resize())
}
