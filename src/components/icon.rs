use leptos::prelude::*;
use tailwind_fuse::*;

/// Decorative SVG icon, hidden from assistive technology.
#[component]
pub fn Icon(#[prop(into)] icon: icondata::Icon, #[prop(optional, into)] class: String) -> impl IntoView {
  view! {
    <svg
      data-slot="icon"
      aria-hidden="true"
      class=tw_merge!("inline-block", class.as_str())
      x=icon.x
      y=icon.y
      viewBox=icon.view_box
      stroke-linecap=icon.stroke_linecap
      stroke-linejoin=icon.stroke_linejoin
      stroke-width=icon.stroke_width
      stroke=icon.stroke
      fill=icon.fill.unwrap_or("currentColor")
      inner_html=icon.data
    />
  }
}
