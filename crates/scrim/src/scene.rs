//! The resolved render description handed to the embedding renderer.
//!
//! The host orchestrates state; drawing is the renderer's job. A [`Scene`]
//! is everything the renderer needs for one frame of the overlay: resolved
//! class names and inline styles per region, accessibility attributes, the
//! close-button slot, the loading flag, and the content handle with its
//! merged properties.

use std::rc::Rc;

use crate::{
    config::{CloseButton, Region},
    content::{Content, Props},
    page::Viewport,
    session::ModalSession,
    style,
};

/// Resolved presentation attributes for one overlay region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionAttrs {
    /// Space-joined class list, `None` when no class applies.
    pub class: Option<String>,
    /// Resolved inline style string, `None` when no style applies.
    pub style: Option<String>,
}

/// The close-button slot as it should be rendered.
pub struct CloseButtonScene {
    /// Presentation attributes for the button region.
    pub attrs: RegionAttrs,
    /// Caller renderer for the button; `None` means the host's default
    /// button visual.
    pub renderer: Option<Rc<dyn Content>>,
}

/// One frame of the overlay.
pub struct Scene {
    /// Backdrop attributes. Always carries viewport width/height underneath
    /// any caller overrides.
    pub background: RegionAttrs,
    /// Wrapper attributes.
    pub wrapper: RegionAttrs,
    /// Dialog window attributes.
    pub window: RegionAttrs,
    /// Content-area attributes.
    pub content_region: RegionAttrs,
    /// Close-button slot, `None` when the button is hidden.
    pub close_button: Option<CloseButtonScene>,
    /// Accessibility label for the window.
    pub aria_label: Option<String>,
    /// Id of the window's labelling element.
    pub aria_labelled_by: Option<String>,
    /// Whether the nested loading overlay is shown.
    pub loading: bool,
    /// The active content renderer.
    pub content: Rc<dyn Content>,
    /// Merged properties the content was shown with.
    pub props: Props,
}

/// Resolve the class list for a region: the default region class unless the
/// config is unstyled, with any caller override appended.
fn region_class(session: &ModalSession, region: Region) -> Option<String> {
    let caller = session.config.classes.get(region);
    if session.config.unstyled {
        return caller.map(str::to_string);
    }
    match caller {
        Some(extra) => Some(format!("{} {}", region.default_class(), extra)),
        None => Some(region.default_class().to_string()),
    }
}

/// Resolve attributes for a non-background region.
fn region_attrs(session: &ModalSession, region: Region) -> RegionAttrs {
    RegionAttrs {
        class: region_class(session, region),
        style: session.config.styles.get(region).and_then(style::resolve),
    }
}

/// Build the scene for the current session.
pub(crate) fn build(session: &ModalSession, viewport: Viewport) -> Scene {
    let background = RegionAttrs {
        class: region_class(session, Region::Background),
        style: style::resolve_background(session.config.styles.get(Region::Background), viewport),
    };
    let close_button = match &session.config.close_button {
        CloseButton::None => None,
        CloseButton::Default => Some(CloseButtonScene {
            attrs: region_attrs(session, Region::CloseButton),
            renderer: None,
        }),
        CloseButton::Custom(renderer) => Some(CloseButtonScene {
            attrs: region_attrs(session, Region::CloseButton),
            renderer: Some(renderer.clone()),
        }),
    };
    Scene {
        background,
        wrapper: region_attrs(session, Region::Wrapper),
        window: region_attrs(session, Region::Window),
        content_region: region_attrs(session, Region::Content),
        close_button,
        aria_label: session.config.aria_label.clone(),
        aria_labelled_by: session.config.aria_labelled_by.clone(),
        loading: session.loading,
        content: session.content.clone(),
        props: session.props.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{ModalConfig, ModalConfigPatch},
        session::CallbackSet,
        style::StyleMap,
    };

    /// Minimal content stub.
    struct Body;
    impl Content for Body {}

    /// Session with the given patch applied.
    fn session(patch: ModalConfigPatch) -> ModalSession {
        ModalSession {
            content: Rc::new(Body),
            props: Props::new(),
            config: ModalConfig::merged(&patch),
            loading: false,
            callbacks: CallbackSet::default(),
        }
    }

    /// The viewport used in these tests.
    const VP: Viewport = Viewport {
        width: 640,
        height: 480,
    };

    #[test]
    fn default_scene_has_region_classes_and_viewport_background() {
        let scene = build(&session(ModalConfigPatch::new()), VP);
        assert_eq!(scene.background.class.as_deref(), Some("scrim-background"));
        assert_eq!(scene.window.class.as_deref(), Some("scrim-window"));
        assert_eq!(
            scene.background.style.as_deref(),
            Some("; height: 480px; width: 640px")
        );
        assert!(scene.close_button.is_some());
        assert!(scene.window.style.is_none());
    }

    #[test]
    fn caller_class_is_appended() {
        let mut patch = ModalConfigPatch::new();
        patch.window_class = Some("wide".into());
        let scene = build(&session(patch), VP);
        assert_eq!(scene.window.class.as_deref(), Some("scrim-window wide"));
    }

    #[test]
    fn unstyled_suppresses_default_classes() {
        let mut patch = ModalConfigPatch::new().unstyled(true);
        patch.window_class = Some("wide".into());
        let scene = build(&session(patch), VP);
        assert_eq!(scene.window.class.as_deref(), Some("wide"));
        assert_eq!(scene.wrapper.class, None);
        // Viewport sizing is behavioral, not cosmetic, so it survives.
        assert_eq!(
            scene.background.style.as_deref(),
            Some("; height: 480px; width: 640px")
        );
    }

    #[test]
    fn window_style_overrides_resolve() {
        let mut patch = ModalConfigPatch::new();
        let mut styles = StyleMap::new();
        styles.insert("maxWidth".into(), "40em".into());
        patch.window_style = Some(styles);
        let scene = build(&session(patch), VP);
        assert_eq!(scene.window.style.as_deref(), Some("; max-width: 40em"));
    }

    #[test]
    fn hidden_close_button_is_absent() {
        let patch = ModalConfigPatch::new().close_button(CloseButton::None);
        let scene = build(&session(patch), VP);
        assert!(scene.close_button.is_none());
    }
}
