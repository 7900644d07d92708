//! User interface subsystem - screens, menu and button handling.
//!
//! The button task feeds debounced presses into a small state machine
//! whose fields are shared with the render loop; the render loop draws
//! the current view on the SSD1306 OLED.
//!
//! ## Components
//!
//! - **Debounce**: turns raw falling edges into discrete presses
//! - **Navigation**: `(Screen, ButtonId)` transition table
//! - **Shared**: atomic per-field view of the navigation state
//! - **Layout**: labels and geometry helpers used by the renderer

pub mod debounce;
pub mod input_logic;
pub mod layout;
pub mod navigation;
pub mod shared;

/// Physical button lines.
///
/// Three buttons:
///   - PREVIOUS: move left in the menu / decrement
///   - NEXT: move right in the menu / increment
///   - SELECT: open the highlighted item / back to the menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    Previous,
    Next,
    Select,
}

impl ButtonId {
    pub const ALL: [ButtonId; 3] = [ButtonId::Previous, ButtonId::Next, ButtonId::Select];

    /// Dense index used for per-line bookkeeping.
    pub const fn index(self) -> usize {
        match self {
            ButtonId::Previous => 0,
            ButtonId::Next => 1,
            ButtonId::Select => 2,
        }
    }
}

/// A press that survived debouncing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub id: ButtonId,
    /// Monotonic time of the accepted edge (ms since boot).
    pub at_ms: u64,
}

/// Screens (views) the UI can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Main menu - one item visible at a time.
    Menu,
    /// Live sound level with a bar graph.
    Measurement,
    /// Threshold editor.
    SetThreshold,
    /// LED on/off toggle.
    Configuration,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Menu,
        Screen::Measurement,
        Screen::SetThreshold,
        Screen::Configuration,
    ];

    /// Raw encoding used by the shared atomic cell.
    pub const fn as_raw(self) -> u8 {
        match self {
            Screen::Menu => 0,
            Screen::Measurement => 1,
            Screen::SetThreshold => 2,
            Screen::Configuration => 3,
        }
    }

    /// Decode a raw value; anything unknown falls back to the menu.
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Screen::Measurement,
            2 => Screen::SetThreshold,
            3 => Screen::Configuration,
            _ => Screen::Menu,
        }
    }
}

/// Entries of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    View,
    SetThreshold,
    Configure,
}

impl MenuItem {
    /// Screen opened when this item is selected.
    pub const fn target(self) -> Screen {
        match self {
            MenuItem::View => Screen::Measurement,
            MenuItem::SetThreshold => Screen::SetThreshold,
            MenuItem::Configure => Screen::Configuration,
        }
    }
}

/// Main-menu variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuLayout {
    /// View, Set threshold, Configure.
    Full,
    /// View, Configure (no threshold editor).
    Compact,
}

const FULL_ITEMS: [MenuItem; 3] = [MenuItem::View, MenuItem::SetThreshold, MenuItem::Configure];
const COMPACT_ITEMS: [MenuItem; 2] = [MenuItem::View, MenuItem::Configure];

impl MenuLayout {
    pub const fn items(self) -> &'static [MenuItem] {
        match self {
            MenuLayout::Full => &FULL_ITEMS,
            MenuLayout::Compact => &COMPACT_ITEMS,
        }
    }

    pub const fn count(self) -> usize {
        self.items().len()
    }

    /// Item at `index`, clamped to the last entry.
    pub fn item(self, index: u8) -> MenuItem {
        let items = self.items();
        let last = items.len() - 1;
        items[(index as usize).min(last)]
    }
}
