//! Gallery page rendering
//!
//! One page per component showing its main variants, plus an index. Pages
//! embed the interaction chains exactly as a host would receive them, so a
//! rendered gallery doubles as a wire-format reference.

use std::fs;
use std::path::Path;

use velum_core::{div, el, text, Node, Render};
use velum_theme::{values, ThemePreset};
use velum_ui::prelude::*;

/// Catalog order is the index order.
pub const COMPONENTS: &[&str] = &[
    "accordion",
    "alert",
    "avatar",
    "badge",
    "banner",
    "breadcrumb",
    "button",
    "card",
    "chat",
    "checkbox_field",
    "divider",
    "drawer",
    "dropdown",
    "fieldset",
    "indicator",
    "input_field",
    "list",
    "modal",
    "native_select",
    "navbar",
    "overlay",
    "pagination",
    "popover",
    "progress",
    "radio_field",
    "range_field",
    "rating",
    "skeleton",
    "spinner",
    "table",
    "tabs",
    "textarea_field",
    "toast",
    "toggle_field",
    "tooltip",
];

/// Renders the gallery; returns the number of pages written.
pub fn write(out: &Path, preset: ThemePreset, only: Option<&[String]>) -> anyhow::Result<usize> {
    fs::create_dir_all(out)?;
    let mut written = 0;
    let mut index_entries = Vec::new();
    if let Some(only) = only {
        for requested in only {
            if !COMPONENTS.contains(&requested.as_str()) {
                tracing::warn!(component = %requested, "not in the catalog, skipping");
            }
        }
    }
    for &name in COMPONENTS {
        if only.is_some_and(|only| !only.iter().any(|n| n == name)) {
            continue;
        }
        tracing::debug!(component = name, "rendering gallery page");
        let page = document(name, preset, &demo(name));
        fs::write(out.join(format!("{name}.html")), page)?;
        index_entries.push(name);
        written += 1;
    }
    let index = document("components", preset, &index_body(&index_entries));
    fs::write(out.join("index.html"), index)?;
    Ok(written + 1)
}

fn document(title: &str, preset: ThemePreset, body: &Node) -> String {
    format!(
        concat!(
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "<title>Velum - {title}</title>",
            "<script src=\"https://cdn.tailwindcss.com\"></script>",
            "</head><body class=\"{body_class}\">",
            "<main class=\"mx-auto max-w-3xl space-y-10 p-8\">{body}</main>",
            "</body></html>"
        ),
        title = title,
        body_class = preset.body_class(),
        body = body.to_html(),
    )
}

fn index_body(entries: &[&str]) -> Node {
    let links = entries.iter().map(|name| {
        el("li").child(
            el("a")
                .attr("href", format!("{name}.html"))
                .class("text-[#4363EC] hover:underline")
                .text(*name),
        )
    });
    div()
        .child(el("h1").class("text-2xl font-semibold mb-4").text("Velum components"))
        .child(el("ul").class("columns-2 space-y-1 list-none").children(links))
        .into_node()
}

fn section(title: &str, content: Node) -> Node {
    el("section")
        .class("space-y-3")
        .child(el("h2").class("text-lg font-semibold").text(title))
        .child(content)
        .into_node()
}

/// Demo tree for one component page.
fn demo(name: &str) -> Node {
    match name {
        "accordion" => section(
            "Accordion",
            div()
                .class("space-y-6")
                .child(
                    Accordion::new("faq")
                        .color("primary")
                        .rounded("medium")
                        .space("small")
                        .item(AccordionItem::new("What is Velum?").content(text("A component library.")))
                        .item(AccordionItem::new("Is it themable?").open(true).content(text("Yes.")))
                        .render(),
                )
                .child(
                    Accordion::new("faq-native")
                        .mode(AccordionMode::Native)
                        .variant("bordered")
                        .color("light")
                        .item(AccordionItem::new("Native disclosure").content(text("No chains at all.")))
                        .render(),
                )
                .into_node(),
        ),
        "alert" => section(
            "Alert",
            div()
                .class("space-y-3")
                .children(values::COLORS.iter().map(|color| {
                    Alert::new(format!("alert-{color}"))
                        .color(*color)
                        .title(*color)
                        .content(text("Static flash message."))
                        .dismissable(true)
                        .render()
                }))
                .into_node(),
        ),
        "avatar" => section(
            "Avatar",
            div()
                .class("flex items-center gap-6")
                .child(Avatar::new().initials("AK").color("primary").render())
                .child(Avatar::new().initials("VL").color("misc").size("extra_large").render())
                .child(
                    AvatarGroup::new()
                        .avatar(Avatar::new().initials("A").border("small"))
                        .avatar(Avatar::new().initials("B").color("info").border("small"))
                        .avatar(Avatar::new().initials("C").color("dawn").border("small"))
                        .render(),
                )
                .into_node(),
        ),
        "badge" => section(
            "Badge",
            div()
                .class("flex flex-wrap gap-2")
                .children(values::COLORS.iter().map(|color| {
                    Badge::new(*color).color(*color).indicator(*color).render()
                }))
                .into_node(),
        ),
        "banner" => section(
            "Banner",
            Banner::new("promo")
                .color("info")
                .content(text("Release 0.2 is out."))
                .render(),
        ),
        "breadcrumb" => section(
            "Breadcrumb",
            Breadcrumb::new()
                .item(BreadcrumbItem::new("Home").href("/"))
                .item(BreadcrumbItem::new("Library").href("/library"))
                .item(BreadcrumbItem::new("Data"))
                .render(),
        ),
        "button" => section(
            "Button",
            div()
                .class("space-y-4")
                .children(["default", "outline", "transparent", "shadow"].map(|variant| {
                    div()
                        .class("flex flex-wrap gap-2")
                        .children(values::COLORS.iter().map(|color| {
                            Button::new(*color).variant(variant).color(*color).render()
                        }))
                        .into_node()
                }))
                .into_node(),
        ),
        "card" => section(
            "Card",
            Card::new()
                .color("white")
                .rounded("large")
                .header(CardSection::new(text("Monthly report")))
                .content(CardSection::new(text("Numbers went up.")))
                .footer(CardSection::new(text("Updated today")))
                .render(),
        ),
        "chat" => section(
            "Chat",
            div()
                .class("space-y-3")
                .child(Chat::new().author("Kim").content(text("Shipping today?")).time("12:40").render())
                .child(
                    Chat::new()
                        .color("primary")
                        .flipped(true)
                        .content(text("Yes, before noon."))
                        .time("12:41")
                        .render(),
                )
                .into_node(),
        ),
        "checkbox_field" => section(
            "Checkbox field",
            div()
                .class("space-y-2")
                .child(CheckboxField::new("terms").label("Accept the terms").render())
                .child(CheckboxField::new("news").label("Subscribe").color("success").checked(true).render())
                .into_node(),
        ),
        "divider" => section(
            "Divider",
            div()
                .class("space-y-6")
                .child(Divider::new().render())
                .child(Divider::new().text("or").kind("dashed").render())
                .into_node(),
        ),
        "drawer" => {
            let drawer = Drawer::new("side").position("right").title("Cart");
            section(
                "Drawer",
                div()
                    .child(Button::new("Open drawer").on_click(drawer.show_chain()).render())
                    .child(drawer.content(text("Drawer body")).render())
                    .into_node(),
            )
        }
        "dropdown" => section(
            "Dropdown",
            Dropdown::new("account")
                .trigger_label("Account")
                .item(DropdownItem::new("Profile").href("/profile"))
                .item(DropdownItem::new("Settings").href("/settings"))
                .item(DropdownItem::new("Sign out").href("/logout"))
                .render(),
        ),
        "fieldset" => section(
            "Fieldset",
            Fieldset::new("shipping")
                .legend("Shipping address")
                .field(InputField::text("street").label("Street").render())
                .field(InputField::text("city").label("City").render())
                .render(),
        ),
        "indicator" => section(
            "Indicator",
            div()
                .class("flex items-center gap-6")
                .child(Indicator::new().render())
                .child(Indicator::new().color("danger").pinging(true).render())
                .child(
                    Indicator::new()
                        .color("success")
                        .child(Avatar::new().initials("AK").render())
                        .render(),
                )
                .into_node(),
        ),
        "input_field" => section(
            "Input field",
            div()
                .class("space-y-4")
                .child(InputField::text("name").label("Name").placeholder("Ada").render())
                .child(
                    InputField::email("email")
                        .label("Email")
                        .label_mode(LabelMode::Floating)
                        .render(),
                )
                .child(
                    InputField::search("q")
                        .label("Search")
                        .color("primary")
                        .rounded("full")
                        .render(),
                )
                .child(InputField::number("age").label("Age").errors(["must be positive"]).render())
                .into_node(),
        ),
        "list" => section(
            "List",
            List::new()
                .variant("bordered")
                .color("light")
                .item(ListItem::new(text("First")))
                .item(ListItem::new(text("Second")))
                .item(ListItem::new(text("Third")))
                .render(),
        ),
        "modal" => {
            let modal = Modal::new("confirm").title("Confirm").size("small");
            section(
                "Modal",
                div()
                    .child(Button::new("Open modal").on_click(modal.show_chain()).render())
                    .child(modal.content(text("Are you sure?")).render())
                    .into_node(),
            )
        }
        "native_select" => section(
            "Native select",
            NativeSelect::new("plan")
                .label("Plan")
                .option(SelectOption::new("Basic", "basic"))
                .option(SelectOption::new("Pro", "pro").selected(true))
                .option(SelectOption::new("Enterprise", "enterprise"))
                .render(),
        ),
        "navbar" => section(
            "Navbar",
            Navbar::new("nav")
                .color("dark")
                .brand(text("Velum"))
                .link(NavbarLink::new("Docs", "/docs").active(true))
                .link(NavbarLink::new("Pricing", "/pricing"))
                .render(),
        ),
        "overlay" => section(
            "Overlay",
            div()
                .class("relative h-40 overflow-hidden rounded-md border border-[#DADADA]")
                .child(text("Content under the overlay"))
                .child(Overlay::new().opacity("small").class("absolute").render())
                .into_node(),
        ),
        "pagination" => section(
            "Pagination",
            div()
                .class("space-y-3")
                .child(Pagination::new("pages", 5).current(2).render())
                .child(Pagination::new("long", 20).current(10).color("dark").render())
                .into_node(),
        ),
        "popover" => section(
            "Popover",
            Popover::new("pop")
                .trigger(text("What is this?"))
                .content(text("A floating panel."))
                .position("bottom")
                .render(),
        ),
        "progress" => section(
            "Progress",
            div()
                .class("space-y-3")
                .child(Progress::new(30).render())
                .child(Progress::new(65).color("success").label("Uploading").render())
                .child(Progress::new(90).color("danger").striped(true).render())
                .into_node(),
        ),
        "radio_field" => section(
            "Radio field",
            div()
                .class("space-y-2")
                .child(RadioField::new("plan-basic").name("plan").value("basic").label("Basic").checked(true).render())
                .child(RadioField::new("plan-pro").name("plan").value("pro").label("Pro").render())
                .into_node(),
        ),
        "range_field" => section(
            "Range field",
            RangeField::new("volume")
                .label("Volume")
                .min(0)
                .max(11)
                .value(7)
                .captions(true)
                .render(),
        ),
        "rating" => section(
            "Rating",
            div()
                .class("space-y-2")
                .child(Rating::new("stars").value(3).render())
                .child(Rating::new("vote").interactive(true).color("primary").render())
                .into_node(),
        ),
        "skeleton" => section(
            "Skeleton",
            div()
                .class("space-y-4")
                .child(Skeleton::new().class("h-24 w-full").render())
                .child(Skeleton::lines(3).render())
                .into_node(),
        ),
        "spinner" => section(
            "Spinner",
            div()
                .class("flex items-center gap-4")
                .children(values::SIZES.iter().map(|size| Spinner::new().size(*size).render()))
                .into_node(),
        ),
        "table" => section(
            "Table",
            Table::new("invoices")
                .variant("striped")
                .color("primary")
                .rounded("medium")
                .header(["Number", "Customer", "Amount"])
                .row(TableRow::new().cell(text("#1001")).cell(text("Ada")).cell(text("$250")))
                .row(TableRow::new().cell(text("#1002")).cell(text("Grace")).cell(text("$120")))
                .footer_row(TableRow::new().cell(text("")).cell(text("Total")).cell(text("$370")))
                .render(),
        ),
        "tabs" => section(
            "Tabs",
            Tabs::new("settings")
                .variant("pills")
                .color("primary")
                .tab(Tab::new("Profile").content(text("Profile panel")))
                .tab(Tab::new("Billing").content(text("Billing panel")))
                .tab(Tab::new("Team").content(text("Team panel")))
                .render(),
        ),
        "textarea_field" => section(
            "Textarea field",
            TextareaField::new("bio").label("Bio").placeholder("A few words").rows(5).render(),
        ),
        "toast" => section(
            "Toast",
            ToastGroup::new("notices")
                .vertical("bottom")
                .horizontal("right")
                .toast(Toast::new().color("success").title("Saved").content(text("All changes stored.")))
                .toast(Toast::new().color("danger").title("Failed").content(text("Try again.")))
                .render(),
        ),
        "toggle_field" => section(
            "Toggle field",
            div()
                .class("space-y-2")
                .child(ToggleField::new("notify").label("Notifications").checked(true).render())
                .child(ToggleField::new("beta").label("Beta features").color("success").render())
                .into_node(),
        ),
        "tooltip" => section(
            "Tooltip",
            Tooltip::new("Copied to clipboard")
                .child(Button::new("Copy").variant("outline").render())
                .render(),
        ),
        other => {
            tracing::warn!(component = other, "no demo registered");
            Node::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_entry_has_a_demo() {
        for name in COMPONENTS {
            assert_ne!(demo(name).to_html(), "", "{name} demo is empty");
        }
    }

    #[test]
    fn test_document_embeds_preset_chrome() {
        let page = document("alert", ThemePreset::Dawn, &demo("alert"));
        assert!(page.contains("bg-[#FFECDA]"));
        assert!(page.starts_with("<!doctype html>"));
    }
}
