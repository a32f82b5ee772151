// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target-element snapshots and element-shaped predicates.
//!
//! Classifiers never touch the host's element objects. The host snapshots
//! the handful of facts normalization needs into a [`TargetProps`] value —
//! the same pattern the rest of Canopy uses for node data — and the
//! predicates here answer questions about the element's shape: is it a text
//! surface, can it take focus, does the host already activate it natively.

use kurbo::Rect;

/// Element tag, reduced to the tags that change classification behavior.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `<a>`.
    Anchor,
    /// `<button>`.
    Button,
    /// `<div>`.
    Div,
    /// `<input>`.
    Input,
    /// `<option>`.
    Option,
    /// `<select>`.
    Select,
    /// `<span>`.
    Span,
    /// `<textarea>`.
    TextArea,
    /// Any other element.
    Other,
}

impl Tag {
    /// Tags the host platform makes focusable without an explicit tab index.
    const fn is_natively_focusable(self) -> bool {
        matches!(
            self,
            Self::Anchor | Self::Button | Self::Input | Self::Select | Self::TextArea
        )
    }
}

/// The `type` of an `<input>` element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputType {
    /// `type="button"`.
    Button,
    /// `type="checkbox"`.
    Checkbox,
    /// `type="color"`.
    Color,
    /// `type="date"`.
    Date,
    /// `type="datetime-local"`.
    DatetimeLocal,
    /// `type="email"`.
    Email,
    /// `type="file"`.
    File,
    /// `type="hidden"`.
    Hidden,
    /// `type="image"`.
    Image,
    /// `type="month"`.
    Month,
    /// `type="number"`.
    Number,
    /// `type="password"`.
    Password,
    /// `type="radio"`.
    Radio,
    /// `type="range"`.
    Range,
    /// `type="reset"`.
    Reset,
    /// `type="search"`.
    Search,
    /// `type="submit"`.
    Submit,
    /// `type="tel"`.
    Tel,
    /// `type="text"`.
    Text,
    /// `type="time"`.
    Time,
    /// `type="url"`.
    Url,
    /// `type="week"`.
    Week,
}

impl InputType {
    /// Input types that are free-text, numeric, or otherwise value-entry
    /// surfaces, where Enter/Space belong to editing rather than activation.
    const fn is_entry_surface(self) -> bool {
        matches!(
            self,
            Self::Color
                | Self::Date
                | Self::DatetimeLocal
                | Self::Email
                | Self::Month
                | Self::Number
                | Self::Password
                | Self::Range
                | Self::Search
                | Self::Tel
                | Self::Text
                | Self::Time
                | Self::Url
                | Self::Week
        )
    }
}

/// ARIA role, reduced to the roles the key-trigger table knows about.
///
/// An explicit role always overrides tag and input type when classifying
/// which key activates an element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// `role="button"`.
    Button,
    /// `role="checkbox"`.
    Checkbox,
    /// `role="combobox"`.
    Combobox,
    /// `role="gridcell"`.
    Gridcell,
    /// `role="link"`.
    Link,
    /// `role="listbox"`.
    Listbox,
    /// `role="menu"`.
    Menu,
    /// `role="menubar"`.
    MenuBar,
    /// `role="menuitem"`.
    MenuItem,
    /// `role="menuitemcheckbox"`.
    MenuItemCheckbox,
    /// `role="menuitemradio"`.
    MenuItemRadio,
    /// `role="option"`.
    Option,
    /// `role="radio"`.
    Radio,
    /// `role="radiogroup"`.
    RadioGroup,
    /// `role="switch"`.
    Switch,
    /// `role="tab"`.
    Tab,
    /// `role="textbox"`.
    TextBox,
    /// `role="tree"`.
    Tree,
    /// `role="treeitem"`.
    TreeItem,
}

/// Host-provided snapshot of a target element.
///
/// Everything the classifiers read about an element lives here; the host
/// fills one in per event (or keeps them alongside its nodes) and never
/// hands over the element itself. `rect` is the element's rendered bounds:
/// `None` means "not rendered", and zero-area means "hidden", both of which
/// disqualify the element from keyboard activation.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetProps {
    /// Element tag.
    pub tag: Tag,
    /// `type` attribute for `<input>` elements; `None` elsewhere, and also
    /// for inputs that never declared one.
    pub input_type: Option<InputType>,
    /// Explicit ARIA role, if any.
    pub role: Option<Role>,
    /// Explicit tab index, if any.
    pub tab_index: Option<i32>,
    /// Whether the control is disabled.
    pub disabled: bool,
    /// Whether the element is an editable content region.
    pub content_editable: bool,
    /// Whether the element carries an `href` (links only).
    pub href: bool,
    /// Rendered bounds; `None` when the element is not rendered.
    pub rect: Option<Rect>,
}

impl TargetProps {
    /// A plain element of the given tag: no role, no type, not tabbable,
    /// enabled, not editable, not rendered.
    pub const fn new(tag: Tag) -> Self {
        Self {
            tag,
            input_type: None,
            role: None,
            tab_index: None,
            disabled: false,
            content_editable: false,
            href: false,
            rect: None,
        }
    }

    /// Set the input type.
    pub const fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = Some(input_type);
        self
    }

    /// Set the ARIA role.
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the tab index.
    pub const fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Set the rendered bounds.
    pub const fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = Some(rect);
        self
    }

    /// Mark the element disabled.
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Mark the element as an editable content region.
    pub const fn editable(mut self) -> Self {
        self.content_editable = true;
        self
    }

    /// Mark the element as carrying an `href`.
    pub const fn with_href(mut self) -> Self {
        self.href = true;
        self
    }

    /// Whether the element is a text-entry surface.
    ///
    /// A `combobox`/`textbox` role always makes it one, whatever the
    /// element underneath. Otherwise: textareas, and inputs whose type is an
    /// entry surface — including inputs that never declared a type, which
    /// the host treats as text.
    pub fn is_text_control(&self) -> bool {
        if matches!(self.role, Some(Role::Combobox | Role::TextBox)) {
            return true;
        }
        match self.tag {
            Tag::TextArea => true,
            Tag::Input => self.input_type.is_none_or(InputType::is_entry_surface),
            _ => false,
        }
    }

    /// Whether keyboard activation may target this element at all.
    ///
    /// Text-entry surfaces and editable content regions take Enter/Space
    /// for editing; they are never action-key targets.
    pub fn is_valid_action_key_target(&self) -> bool {
        !self.is_text_control() && !self.content_editable
    }

    /// Whether the element can currently take focus.
    ///
    /// Requires an enabled element that is either natively focusable by tag
    /// or carries an explicit tab index (assistive tech reaches any
    /// tab-indexed element), and that is rendered with non-zero area.
    pub fn is_focusable(&self) -> bool {
        if self.disabled {
            return false;
        }
        if !self.tag.is_natively_focusable() && self.tab_index.is_none() {
            return false;
        }
        self.rect
            .is_some_and(|r| r.width() > 0.0 && r.height() > 0.0)
    }

    /// Whether the host itself turns Space into activation on this element,
    /// so a Space keydown must not be reported as an action key.
    ///
    /// True for real checkbox, radio, and file inputs only; role-based
    /// imitations still need the classifier.
    pub fn handles_space_natively(&self) -> bool {
        self.tag == Tag::Input
            && matches!(
                self.input_type,
                Some(InputType::Checkbox | InputType::Radio | InputType::File)
            )
    }

    /// Whether the host already converts action keys into a click on this
    /// element (real buttons, links with an `href`, native form buttons).
    ///
    /// Reporting an action key for these would activate the control twice.
    pub fn is_natively_activatable(&self) -> bool {
        match self.tag {
            Tag::Button => true,
            Tag::Anchor => self.href,
            Tag::Input => matches!(
                self.input_type,
                Some(
                    InputType::Button
                        | InputType::Submit
                        | InputType::Reset
                        | InputType::File
                        | InputType::Image
                )
            ),
            _ => false,
        }
    }
}

/// Whether a caller should cancel the native default on activation of this
/// element to avoid the host double-activating it.
///
/// True only for button-like controls: real `<button>`s, `role="button"`
/// elements, and button-flavored inputs. Checkable controls, selects,
/// options, and links keep their native default — cancelling it would break
/// toggling and navigation rather than prevent a duplicate.
pub fn should_prevent_default_on_native_control(target: &TargetProps) -> bool {
    if target.tag == Tag::Button || target.role == Some(Role::Button) {
        return true;
    }
    target.tag == Tag::Input
        && matches!(
            target.input_type,
            Some(InputType::Button | InputType::Submit | InputType::Reset | InputType::Image)
        )
}
