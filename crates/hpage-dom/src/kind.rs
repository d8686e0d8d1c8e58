//! Element kinds
//!
//! Tag-specific capabilities. Behaviour that depends on "what kind of
//! element is this" asks the kind instead of comparing tag strings.

/// Element kind derived from the tag name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Anchor,
    Area,
    Base,
    Body,
    Button,
    Form,
    Frame,
    FrameSet,
    Head,
    Html,
    IFrame,
    Input,
    Label,
    Legend,
    Meta,
    Object,
    Script,
    Select,
    TextArea,
    Title,
    Other,
}

impl ElementKind {
    /// Classify a (lowercase) tag name
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "a" => Self::Anchor,
            "area" => Self::Area,
            "base" => Self::Base,
            "body" => Self::Body,
            "button" => Self::Button,
            "form" => Self::Form,
            "frame" => Self::Frame,
            "frameset" => Self::FrameSet,
            "head" => Self::Head,
            "html" => Self::Html,
            "iframe" => Self::IFrame,
            "input" => Self::Input,
            "label" => Self::Label,
            "legend" => Self::Legend,
            "meta" => Self::Meta,
            "object" => Self::Object,
            "script" => Self::Script,
            "select" => Self::Select,
            "textarea" => Self::TextArea,
            "title" => Self::Title,
            _ => Self::Other,
        }
    }

    /// Supports the `tabindex` attribute and takes part in tab navigation
    pub fn is_tabbable(self) -> bool {
        matches!(
            self,
            Self::Anchor
                | Self::Area
                | Self::Button
                | Self::Input
                | Self::Object
                | Self::Select
                | Self::TextArea
        )
    }

    /// May carry an `accesskey`
    pub fn accepts_access_key(self) -> bool {
        matches!(
            self,
            Self::Anchor
                | Self::Area
                | Self::Button
                | Self::Input
                | Self::Label
                | Self::Legend
                | Self::TextArea
        )
    }

    pub fn is_base(self) -> bool {
        self == Self::Base
    }

    /// Owns a nested browsing context
    pub fn is_frame(self) -> bool {
        matches!(self, Self::Frame | Self::IFrame)
    }
}
