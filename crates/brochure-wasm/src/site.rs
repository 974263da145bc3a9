//! Mounting the controllers onto the live document.
//!
//! Each behaviour mounts on its own. A behaviour whose elements are absent
//! is skipped with a debug message; one that fails to attach is skipped with
//! a warning. Neither stops the others.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use brochure_core::{
    ClickOrigin, ContactForm, CounterRun, Element, FadeReveal, MobileMenu, NavLink, NavbarStyler,
    PageFade, PageRouter, Rect, Ripple, ServiceFields, SiteConfig, SiteError, StatCounter,
};
use leptos::prelude::{IntervalHandle, set_interval_with_handle, set_timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, IntersectionObserver, MouseEvent, Node, Window};

use crate::{
    dom::{DomElement, DomViewport, by_id, dom_error, query_all, query_in},
    events::{listen, observe},
    transport::FetchTransport,
};

pub type Router = PageRouter<DomElement, DomViewport>;
pub type ContactController = ContactForm<DomElement, FetchTransport>;

/// Controllers sharing one intersection observer.
pub struct Observed<T> {
    pub items: Rc<Vec<T>>,
    pub observer: IntersectionObserver,
}

/// Every behaviour mounted on the page.
#[derive(Default)]
pub struct Site {
    pub router: Option<Rc<RefCell<Router>>>,
    pub menu: Option<MobileMenu<DomElement>>,
    pub navbar: Option<NavbarStyler<DomElement>>,
    pub counters: Option<Observed<StatCounter<DomElement>>>,
    pub reveals: Option<Observed<FadeReveal<DomElement>>>,
    pub page_fade: Option<PageFade<DomElement>>,
    pub ripple_buttons: usize,
    pub contact: Option<Rc<ContactController>>,
    pub service: Option<Rc<ServiceFields<DomElement>>>,
}

impl Site {
    /// Mount every behaviour whose elements are present.
    pub fn mount(window: &Window, document: &Document, config: &SiteConfig) -> Self {
        let menu = attached("mobile menu", mount_menu(document, config));
        let router = attached(
            "page router",
            mount_router(window, document, config, menu.clone()),
        );

        Self {
            router,
            menu,
            navbar: attached("navbar", mount_navbar(window, document, config)),
            counters: attached("stat counters", mount_counters(document, config)),
            reveals: attached("fade-in reveals", mount_reveals(document, config)),
            page_fade: attached("page fade", mount_page_fade(window, document, config)),
            ripple_buttons: attached("button ripples", mount_ripples(document, config))
                .unwrap_or(0),
            contact: attached("contact form", mount_contact_form(document, config)),
            service: attached("service fields", mount_service_fields(document, config)),
        }
    }

    /// Navigate to `page`; `false` when the router is absent or no section
    /// matched.
    pub fn navigate(&self, page: &str) -> bool {
        self.router
            .as_ref()
            .is_some_and(|router| router.borrow_mut().navigate(page))
    }

    /// Re-sync the service-dependent fields. `None` when they are absent.
    pub fn check_service(&self) -> Option<bool> {
        self.service.as_ref().map(|service| service.check())
    }
}

fn attached<T>(name: &str, mounted: Result<Option<T>, SiteError>) -> Option<T> {
    match mounted {
        Ok(Some(behaviour)) => Some(behaviour),
        Ok(None) => {
            log::debug!("{name}: elements absent, skipped");
            None
        }
        Err(err) => {
            log::warn!("{name}: {err}");
            None
        }
    }
}

/// Toggle control plus outside-click dismissal. Requires both elements.
pub fn mount_menu(
    document: &Document,
    config: &SiteConfig,
) -> Result<Option<MobileMenu<DomElement>>, SiteError> {
    let selectors = &config.selectors;
    let (Some(panel), Some(toggle)) = (
        by_id(document, &selectors.nav_menu),
        by_id(document, &selectors.menu_toggle),
    ) else {
        return Ok(None);
    };
    let menu = MobileMenu::new(panel, toggle);

    let toggled = menu.clone();
    listen(menu.toggle_control().html(), "click", move |event| {
        event.stop_propagation();
        toggled.toggle();
    })?;

    let dismissed = menu.clone();
    listen(document, "click", move |event| {
        let node = event.target().and_then(|target| target.dyn_into::<Node>().ok());
        let origin = if dismissed.panel().contains(node.as_ref()) {
            ClickOrigin::Panel
        } else if dismissed.toggle_control().contains(node.as_ref()) {
            ClickOrigin::Toggle
        } else {
            ClickOrigin::Outside
        };
        dismissed.on_document_click(origin);
    })?;

    Ok(Some(menu))
}

/// Page sections and the navigation elements pointing at them.
pub fn mount_router(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
    menu: Option<MobileMenu<DomElement>>,
) -> Result<Option<Rc<RefCell<Router>>>, SiteError> {
    let selectors = &config.selectors;
    let attribute = &selectors.page_attribute;
    let pages = query_all(document, &selectors.page)?;
    let links: Vec<NavLink<DomElement>> = query_all(document, &format!("[{attribute}]"))?
        .into_iter()
        .filter_map(|element| {
            element
                .attribute(attribute)
                .map(|page| NavLink::new(page, element))
        })
        .collect();

    if pages.is_empty() && links.is_empty() {
        return Ok(None);
    }

    let mut router = PageRouter::new(pages, links, DomViewport(window.clone()))
        .with_page_suffix(&selectors.page_suffix);
    if let Some(menu) = menu {
        router = router.with_menu(menu);
    }
    let router = Rc::new(RefCell::new(router));

    for link in router.borrow().links() {
        let page = link.page.clone();
        let handle = Rc::clone(&router);
        listen(link.element.html(), "click", move |event| {
            event.prevent_default();
            handle.borrow_mut().navigate(&page);
        })?;
    }

    Ok(Some(router))
}

/// Navbar styling on every scroll event.
pub fn mount_navbar(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<Option<NavbarStyler<DomElement>>, SiteError> {
    let Some(navbar) = by_id(document, &config.selectors.navbar) else {
        return Ok(None);
    };
    let styler = NavbarStyler::new(navbar).with_threshold(config.animation.scroll_threshold);

    let scrolled = styler.clone();
    let view = window.clone();
    listen(window, "scroll", move |_| {
        scrolled.on_scroll(view.scroll_y().unwrap_or(0.0));
    })?;

    Ok(Some(styler))
}

/// Stat counters, started the first time each is half visible.
pub fn mount_counters(
    document: &Document,
    config: &SiteConfig,
) -> Result<Option<Observed<StatCounter<DomElement>>>, SiteError> {
    let elements = query_all(document, &config.selectors.counter)?;
    if elements.is_empty() {
        return Ok(None);
    }

    let animation = &config.animation;
    let tick = Duration::from_millis(u64::from(animation.counter_tick_ms));
    let counters: Rc<Vec<StatCounter<DomElement>>> = Rc::new(
        elements
            .into_iter()
            .map(|element| {
                StatCounter::new(element)
                    .with_target_attribute(&config.selectors.counter_attribute)
                    .with_steps(animation.counter_steps)
            })
            .collect(),
    );

    let watched = Rc::clone(&counters);
    let observer = observe(
        counters.iter().map(|counter| counter.element().as_element()),
        animation.counter_visibility,
        move |entry| {
            if !entry.is_intersecting() {
                return;
            }
            let target = entry.target();
            let run = watched
                .iter()
                .find(|counter| counter.element().is(&target))
                .and_then(StatCounter::on_visible);
            if let Some(run) = run {
                start_counter(run, tick);
            }
        },
    )?;

    Ok(Some(Observed {
        items: counters,
        observer,
    }))
}

/// Drive a counter run from an interval timer until it finishes.
pub fn start_counter(run: CounterRun<DomElement>, tick: Duration) {
    let run = RefCell::new(run);
    let handle: Rc<Cell<Option<IntervalHandle>>> = Rc::new(Cell::new(None));

    let timer = Rc::clone(&handle);
    let started = set_interval_with_handle(
        move || {
            if run.borrow_mut().tick() {
                return;
            }
            if let Some(timer) = timer.take() {
                timer.clear();
            }
        },
        tick,
    );

    match started {
        Ok(interval) => handle.set(Some(interval)),
        Err(err) => log::warn!("cannot start counter: {}", dom_error(err)),
    }
}

/// Fade-in elements, hidden now and revealed on first intersection.
pub fn mount_reveals(
    document: &Document,
    config: &SiteConfig,
) -> Result<Option<Observed<FadeReveal<DomElement>>>, SiteError> {
    let elements = query_all(document, &config.selectors.reveal)?;
    if elements.is_empty() {
        return Ok(None);
    }

    let reveals: Rc<Vec<FadeReveal<DomElement>>> =
        Rc::new(elements.into_iter().map(FadeReveal::prepare).collect());

    let watched = Rc::clone(&reveals);
    let observer = observe(
        reveals.iter().map(|reveal| reveal.element().as_element()),
        config.animation.reveal_visibility,
        move |entry| {
            let target = entry.target();
            if let Some(reveal) = watched.iter().find(|reveal| reveal.element().is(&target)) {
                reveal.on_intersection(entry.is_intersecting());
            }
        },
    )?;

    Ok(Some(Observed {
        items: reveals,
        observer,
    }))
}

/// Body fade-in on window load, or right away if the page already loaded.
pub fn mount_page_fade(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<Option<PageFade<DomElement>>, SiteError> {
    let Some(body) = document.body() else {
        return Ok(None);
    };
    let fade = PageFade::new(DomElement(body)).with_delay(Duration::from_millis(u64::from(
        config.animation.page_fade_delay_ms,
    )));

    if document.ready_state() == "complete" {
        fade_in(&fade);
    } else {
        let loaded = fade.clone();
        listen(window, "load", move |_| fade_in(&loaded))?;
    }

    Ok(Some(fade))
}

fn fade_in(fade: &PageFade<DomElement>) {
    fade.hide();
    let shown = fade.clone();
    set_timeout(move || shown.show(), fade.delay());
}

/// Ripple overlays on generic buttons. Returns the number of buttons wired.
pub fn mount_ripples(document: &Document, config: &SiteConfig) -> Result<Option<usize>, SiteError> {
    let buttons = query_all(document, &config.selectors.button)?;
    if buttons.is_empty() {
        return Ok(None);
    }

    let lifetime = Duration::from_millis(u64::from(config.animation.ripple_lifetime_ms));
    for button in &buttons {
        let target = button.clone();
        let owner = document.clone();
        let attribute = config.selectors.page_attribute.clone();
        listen(button.html(), "click", move |event| {
            if !Ripple::applies_to(&target, &attribute) {
                return;
            }
            let Some(click) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if let Err(err) = spawn_ripple(&owner, &target, click, lifetime) {
                log::warn!("ripple: {err}");
            }
        })?;
    }

    Ok(Some(buttons.len()))
}

/// Append a ripple to `button` centered on the click and schedule its
/// removal.
pub fn spawn_ripple(
    document: &Document,
    button: &DomElement,
    click: &MouseEvent,
    lifetime: Duration,
) -> Result<(), SiteError> {
    let bounds = button.html().get_bounding_client_rect();
    let rect = Rect {
        left: bounds.left(),
        top: bounds.top(),
        width: bounds.width(),
        height: bounds.height(),
    };
    let ripple = Ripple::at(rect, f64::from(click.client_x()), f64::from(click.client_y()));

    let overlay = document.create_element("span").map_err(dom_error)?;
    let overlay = DomElement::from_element(overlay)
        .ok_or_else(|| SiteError::dom("span is not an HTML element"))?;
    ripple.apply(&overlay);
    button.html().append_child(overlay.html()).map_err(dom_error)?;

    set_timeout(move || overlay.html().remove(), lifetime);
    Ok(())
}

/// Asynchronous contact form submission.
pub fn mount_contact_form(
    document: &Document,
    config: &SiteConfig,
) -> Result<Option<Rc<ContactController>>, SiteError> {
    let selectors = &config.selectors;
    let Some(form) = by_id(document, &selectors.contact_form) else {
        return Ok(None);
    };
    let submit = query_in(&form, &selectors.submit_button)?;
    if submit.is_none() {
        log::debug!("contact form has no {}", selectors.submit_button);
    }
    let status = by_id(document, &selectors.form_status);

    let controller = Rc::new(ContactForm::new(
        form,
        submit,
        status,
        FetchTransport,
        config.form.clone(),
    ));

    let handle = Rc::clone(&controller);
    listen(controller.form().html(), "submit", move |event| {
        event.prevent_default();
        let controller = Rc::clone(&handle);
        spawn_local(async move {
            let outcome = controller.submit().await;
            log::debug!("contact form finished: {outcome:?}");
        });
    })?;

    Ok(Some(controller))
}

/// Service-dependent fields, synced on every selection change. Mounting
/// leaves prefilled values alone.
pub fn mount_service_fields(
    document: &Document,
    config: &SiteConfig,
) -> Result<Option<Rc<ServiceFields<DomElement>>>, SiteError> {
    let service = &config.service;
    let (Some(select), Some(container)) = (
        by_id(document, &service.select),
        by_id(document, &service.container),
    ) else {
        return Ok(None);
    };

    let fields = service
        .fields
        .iter()
        .filter_map(|id| {
            let field = by_id(document, id);
            if field.is_none() {
                log::debug!("service field #{id} absent");
            }
            field
        })
        .collect();

    let toggler = Rc::new(
        ServiceFields::new(select, container, fields).with_sentinel(&service.sentinel),
    );

    let handle = Rc::clone(&toggler);
    listen(toggler.select().html(), "change", move |_| {
        handle.check();
    })?;

    Ok(Some(toggler))
}
