// src/mission/record.rs

//! Structured records shared by every platform
//!
//! On disk these are fixed-layout byte runs indexed by convention. Here every
//! slot is a named field. The raw byte boundary (`to_raw_bytes` /
//! `from_raw_bytes`) exists for the file codec only; conversion always works
//! on the structured form.

use crate::error::{Error, GoalCategory, Result};
use crate::platform::Platform;
use serde::{Deserialize, Serialize};

/// Well-known trigger condition codes
pub mod condition {
    pub const ALWAYS: u8 = 0;
    pub const CREATED: u8 = 1;
    pub const DESTROYED: u8 = 2;
    pub const ATTACKED: u8 = 3;
    pub const CAPTURED: u8 = 4;
    pub const DISABLED: u8 = 8;
    pub const NEVER: u8 = 10;
}

/// Well-known trigger variable-type codes
pub mod variable_type {
    pub const NONE: u8 = 0;
    pub const FLIGHT_GROUP: u8 = 1;
    pub const CRAFT_TYPE: u8 = 2;
    pub const CRAFT_CLASS: u8 = 3;
    pub const OBJECT_TYPE: u8 = 4;
    pub const IFF: u8 = 5;
    pub const ORDER: u8 = 6;
    pub const CRAFT_WHEN: u8 = 7;
    pub const GLOBAL_GROUP: u8 = 8;
    pub const MISC: u8 = 9;
    pub const TEAM: u8 = 10;
}

/// Well-known trigger amount codes
pub mod amount {
    pub const PERCENT_100: u8 = 0;
    pub const PERCENT_75: u8 = 1;
    pub const PERCENT_50: u8 = 2;
    pub const PERCENT_25: u8 = 3;
    pub const AT_LEAST_ONE: u8 = 4;
    pub const ALL_BUT_ONE: u8 = 5;
    pub const ALL_SPECIAL: u8 = 6;
    pub const PERCENT_66: u8 = 16;
    pub const PERCENT_33: u8 = 17;
    pub const EACH_CRAFT: u8 = 18;
    pub const EACH_SPECIAL: u8 = 19;
}

/// Fixed-point scale of waypoint coordinates (raw units per kilometer)
pub const WAYPOINT_SCALE: f64 = 160.0;

/// Event time marking the end of a briefing
pub const END_OF_BRIEFING_TIME: u16 = 9999;

/// A condition expression: event + subject + threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Trigger {
    pub condition: u8,
    pub variable_type: u8,
    pub variable: u8,
    pub amount: u8,
    /// Wide parameter, meaningful on XWA only
    #[serde(default)]
    pub parameter: u16,
}

impl Trigger {
    pub const fn new(condition: u8, variable_type: u8, variable: u8, amount: u8) -> Self {
        Self {
            condition,
            variable_type,
            variable,
            amount,
            parameter: 0,
        }
    }

    /// The "none (FALSE)" trigger used for unset goal slots
    pub const fn never() -> Self {
        Self::new(condition::NEVER, variable_type::NONE, 0, amount::PERCENT_100)
    }

    pub fn is_never(&self) -> bool {
        self.condition == condition::NEVER
    }

    /// Raw record length on the given platform
    pub const fn raw_len(platform: Platform) -> usize {
        match platform {
            Platform::Tie => 4,
            Platform::Xvt | Platform::Bop | Platform::Xwa => 6,
        }
    }

    /// Encode as the platform's fixed-layout record
    pub fn to_raw_bytes(&self, platform: Platform) -> Vec<u8> {
        let mut bytes = vec![self.condition, self.variable_type, self.variable, self.amount];
        match platform {
            Platform::Tie => {}
            Platform::Xvt | Platform::Bop => bytes.extend_from_slice(&[0, 0]),
            Platform::Xwa => bytes.extend_from_slice(&self.parameter.to_le_bytes()),
        }
        bytes
    }

    /// Decode from the platform's fixed-layout record
    pub fn from_raw_bytes(bytes: &[u8], platform: Platform) -> Result<Self> {
        let expected = Self::raw_len(platform);
        if bytes.len() != expected {
            return Err(Error::RawRecordLength {
                record: "Trigger",
                platform,
                expected,
                actual: bytes.len(),
            });
        }
        let parameter = if platform == Platform::Xwa {
            u16::from_le_bytes([bytes[4], bytes[5]])
        } else {
            0
        };
        Ok(Self {
            condition: bytes[0],
            variable_type: bytes[1],
            variable: bytes[2],
            amount: bytes[3],
            parameter,
        })
    }
}

/// Largest craft-class value (starfighters .. mines)
const MAX_CRAFT_CLASS: u8 = 6;
/// Largest object-type value
const MAX_OBJECT_TYPE: u8 = 3;
/// Largest "craft when" value
const MAX_CRAFT_WHEN: u8 = 9;
/// Largest target type known on any platform
const MAX_TARGET_TYPE: u8 = 28;

/// An order target: a (type, value) pair validated at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "TargetRepr", into = "TargetRepr")]
pub struct Target {
    target_type: u8,
    value: u8,
}

#[derive(Serialize, Deserialize)]
struct TargetRepr {
    target_type: u8,
    value: u8,
}

impl Target {
    /// The empty target
    pub const NONE: Target = Target {
        target_type: variable_type::NONE,
        value: 0,
    };

    /// Create a target, rejecting combinations that have no meaning
    pub fn new(target_type: u8, value: u8) -> Result<Self> {
        let valid = match target_type {
            variable_type::NONE => value == 0,
            variable_type::CRAFT_CLASS => value <= MAX_CRAFT_CLASS,
            variable_type::OBJECT_TYPE => value <= MAX_OBJECT_TYPE,
            variable_type::CRAFT_WHEN => value <= MAX_CRAFT_WHEN,
            t => t <= MAX_TARGET_TYPE,
        };
        if !valid {
            return Err(Error::InvalidTargetCombination { target_type, value });
        }
        Ok(Self { target_type, value })
    }

    pub fn target_type(&self) -> u8 {
        self.target_type
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_none(&self) -> bool {
        self.target_type == variable_type::NONE
    }
}

impl TryFrom<TargetRepr> for Target {
    type Error = Error;

    fn try_from(repr: TargetRepr) -> Result<Self> {
        Target::new(repr.target_type, repr.value)
    }
}

impl From<Target> for TargetRepr {
    fn from(target: Target) -> Self {
        Self {
            target_type: target.target_type,
            value: target.value,
        }
    }
}

/// A single behavioral directive for a flight group
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Order {
    pub command: u8,
    /// Throttle in tenths of full speed
    pub throttle: u8,
    pub variables: [u8; 4],
    /// Two target pairs: (1, 2) and (3, 4)
    pub targets: [Target; 4],
    pub target1_or_target2: bool,
    pub target3_or_target4: bool,
    /// Order label shown in the cockpit (XvT and XWA only)
    #[serde(default)]
    pub designation: String,
}

impl Order {
    pub fn is_empty(&self) -> bool {
        self.command == 0 && self.targets.iter().all(Target::is_none)
    }
}

/// A position in raw fixed-point units (kilometers x 160)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: i16,
    pub y: i16,
    pub z: i16,
    pub enabled: bool,
}

impl Waypoint {
    pub const RAW_LEN: usize = 8;

    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self {
            x,
            y,
            z,
            enabled: true,
        }
    }

    /// Build an enabled waypoint from kilometer coordinates
    pub fn from_km(x: f64, y: f64, z: f64) -> Self {
        Self::new(km_to_raw(x), km_to_raw(y), km_to_raw(z))
    }

    pub fn x_km(&self) -> f64 {
        raw_to_km(self.x)
    }

    pub fn y_km(&self) -> f64 {
        raw_to_km(self.y)
    }

    pub fn z_km(&self) -> f64 {
        raw_to_km(self.z)
    }

    pub fn to_raw_bytes(&self) -> [u8; Self::RAW_LEN] {
        let mut bytes = [0u8; Self::RAW_LEN];
        bytes[0..2].copy_from_slice(&self.x.to_le_bytes());
        bytes[2..4].copy_from_slice(&self.y.to_le_bytes());
        bytes[4..6].copy_from_slice(&self.z.to_le_bytes());
        bytes[6..8].copy_from_slice(&i16::from(self.enabled).to_le_bytes());
        bytes
    }

    pub fn from_raw_bytes(bytes: &[u8], platform: Platform) -> Result<Self> {
        if bytes.len() != Self::RAW_LEN {
            return Err(Error::RawRecordLength {
                record: "Waypoint",
                platform,
                expected: Self::RAW_LEN,
                actual: bytes.len(),
            });
        }
        let word = |i: usize| i16::from_le_bytes([bytes[i], bytes[i + 1]]);
        Ok(Self {
            x: word(0),
            y: word(2),
            z: word(4),
            enabled: word(6) != 0,
        })
    }
}

/// Convert a raw coordinate to kilometers
pub fn raw_to_km(raw: i16) -> f64 {
    f64::from(raw) / WAYPOINT_SCALE
}

/// Convert kilometers to a raw coordinate, rounding to nearest and saturating
pub fn km_to_raw(km: f64) -> i16 {
    let raw = (km * WAYPOINT_SCALE).round();
    if raw.is_nan() {
        0
    } else if raw >= f64::from(i16::MAX) {
        i16::MAX
    } else if raw <= f64::from(i16::MIN) {
        i16::MIN
    } else {
        raw as i16
    }
}

/// A simple (condition, amount) objective, as used by TIE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalPair {
    pub condition: u8,
    pub amount: u8,
}

impl Default for GoalPair {
    fn default() -> Self {
        Self {
            condition: condition::NEVER,
            amount: amount::PERCENT_100,
        }
    }
}

impl GoalPair {
    pub fn is_set(&self) -> bool {
        self.condition != condition::NEVER
    }
}

/// What a rich flight-group goal asks of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GoalArgument {
    #[default]
    Primary,
    /// The condition must NOT happen
    Prevent,
    Bonus,
    Secondary,
}

/// A flight-group goal on the richer platforms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichGoal {
    pub argument: GoalArgument,
    pub condition: u8,
    pub amount: u8,
    /// Signed point delta awarded on completion
    pub points: i16,
    pub enabled: bool,
    /// Team the goal applies to (0 = team 1)
    pub team: u8,
}

impl Default for RichGoal {
    fn default() -> Self {
        Self {
            argument: GoalArgument::Primary,
            condition: condition::NEVER,
            amount: amount::PERCENT_100,
            points: 0,
            enabled: false,
            team: 0,
        }
    }
}

/// A mission-wide goal category: up to four triggers combined pairwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalGoal {
    pub triggers: [Trigger; 4],
    /// (T1 or T2, T3 or T4, T12 or T34)
    pub and_or: [bool; 3],
    pub points: i16,
}

impl Default for GlobalGoal {
    fn default() -> Self {
        Self {
            triggers: [Trigger::never(); 4],
            and_or: [false; 3],
            points: 0,
        }
    }
}

impl GlobalGoal {
    pub fn is_set(&self) -> bool {
        self.triggers.iter().any(|t| !t.is_never())
    }
}

impl From<GoalArgument> for GoalCategory {
    fn from(argument: GoalArgument) -> Self {
        match argument {
            GoalArgument::Primary => GoalCategory::Primary,
            GoalArgument::Prevent => GoalCategory::Prevent,
            GoalArgument::Bonus => GoalCategory::Bonus,
            GoalArgument::Secondary => GoalCategory::Secondary,
        }
    }
}

/// One team's mission-wide goals on the richer platforms
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Globals {
    pub primary: GlobalGoal,
    pub prevent: GlobalGoal,
    pub secondary: GlobalGoal,
}

impl Globals {
    pub fn categories(&self) -> [(GoalCategory, &GlobalGoal); 3] {
        [
            (GoalCategory::Primary, &self.primary),
            (GoalCategory::Prevent, &self.prevent),
            (GoalCategory::Secondary, &self.secondary),
        ]
    }
}

/// Arrival/departure timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Timer {
    pub minutes: u8,
    pub seconds: u8,
}

impl Timer {
    pub fn total_seconds(&self) -> u32 {
        u32::from(self.minutes) * 60 + u32::from(self.seconds)
    }
}

/// How and when a flight group enters the mission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrival {
    pub triggers: Vec<Trigger>,
    /// One combinator per adjacent trigger pair
    pub and_or: Vec<bool>,
    pub delay: Timer,
    pub mothership: Mothership,
    pub alternate_mothership: Mothership,
}

impl Arrival {
    pub fn new(platform: Platform) -> Self {
        let slots = platform.limits().arrival_triggers;
        Self {
            triggers: vec![Trigger::default(); slots],
            and_or: vec![false; slots.saturating_sub(1)],
            delay: Timer::default(),
            mothership: Mothership::default(),
            alternate_mothership: Mothership::default(),
        }
    }
}

/// How and when a flight group leaves the mission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departure {
    pub triggers: Vec<Trigger>,
    pub and_or: Vec<bool>,
    pub timer: Timer,
    /// Abort condition code
    pub abort: u8,
    pub mothership: Mothership,
    pub alternate_mothership: Mothership,
}

impl Departure {
    pub fn new(platform: Platform) -> Self {
        let slots = platform.limits().departure_triggers;
        Self {
            triggers: vec![Trigger::never(); slots],
            and_or: vec![false; slots.saturating_sub(1)],
            timer: Timer::default(),
            abort: 0,
            mothership: Mothership::default(),
            alternate_mothership: Mothership::default(),
        }
    }
}

/// Orientation in degrees, each axis in -180..=179
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub yaw: i16,
    pub pitch: i16,
    pub roll: i16,
}

/// Mothership reference by flight-group index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Mothership {
    pub flight_group: u8,
    /// Use the mothership instead of hyperspace
    pub enabled: bool,
}

/// Briefing event opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    PageBreak,
    TitleText,
    CaptionText,
    MoveMap,
    ZoomMap,
    ClearFgTags,
    /// Flight-group tag slot 1..=8
    FgTag(u8),
    ClearTextTags,
    /// Text tag slot 1..=8
    TextTag(u8),
    // XWA icon and region manipulation
    NewIcon,
    ShipInfo,
    MoveIcon,
    RotateIcon,
    ChangeRegion,
    EndBriefing,
}

impl EventKind {
    pub fn from_opcode(opcode: u8) -> Option<Self> {
        let kind = match opcode {
            3 => Self::PageBreak,
            4 => Self::TitleText,
            5 => Self::CaptionText,
            6 => Self::MoveMap,
            7 => Self::ZoomMap,
            8 => Self::ClearFgTags,
            9..=16 => Self::FgTag(opcode - 8),
            17 => Self::ClearTextTags,
            18..=25 => Self::TextTag(opcode - 17),
            26 => Self::NewIcon,
            27 => Self::ShipInfo,
            28 => Self::MoveIcon,
            29 => Self::RotateIcon,
            30 => Self::ChangeRegion,
            34 => Self::EndBriefing,
            _ => return None,
        };
        Some(kind)
    }

    pub fn opcode(self) -> u8 {
        match self {
            Self::PageBreak => 3,
            Self::TitleText => 4,
            Self::CaptionText => 5,
            Self::MoveMap => 6,
            Self::ZoomMap => 7,
            Self::ClearFgTags => 8,
            Self::FgTag(slot) => 8 + slot,
            Self::ClearTextTags => 17,
            Self::TextTag(slot) => 17 + slot,
            Self::NewIcon => 26,
            Self::ShipInfo => 27,
            Self::MoveIcon => 28,
            Self::RotateIcon => 29,
            Self::ChangeRegion => 30,
            Self::EndBriefing => 34,
        }
    }

    /// Number of parameter words following the (time, opcode) header
    pub fn param_count(self) -> usize {
        match self {
            Self::PageBreak | Self::ClearFgTags | Self::ClearTextTags | Self::EndBriefing => 0,
            Self::TitleText | Self::CaptionText | Self::FgTag(_) => 1,
            Self::RotateIcon | Self::ChangeRegion => 1,
            Self::MoveMap | Self::ZoomMap | Self::ShipInfo => 2,
            Self::NewIcon | Self::MoveIcon => 3,
            Self::TextTag(_) => 4,
        }
    }

    /// Whether the opcode exists only on XWA
    pub fn is_xwa_only(self) -> bool {
        matches!(
            self,
            Self::NewIcon | Self::ShipInfo | Self::MoveIcon | Self::RotateIcon | Self::ChangeRegion
        )
    }

    pub fn supported_on(self, platform: Platform) -> bool {
        platform == Platform::Xwa || !self.is_xwa_only()
    }
}

/// A time-tagged briefing opcode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingEvent {
    /// Time in platform ticks
    pub time: u16,
    pub kind: EventKind,
    pub params: Vec<i16>,
}

impl BriefingEvent {
    pub fn new(time: u16, kind: EventKind, params: Vec<i16>) -> Self {
        Self { time, kind, params }
    }

    /// The end-of-briefing sentinel
    pub fn end() -> Self {
        Self::new(END_OF_BRIEFING_TIME, EventKind::EndBriefing, Vec::new())
    }

    /// Whether this is the `(9999, end)` sentinel
    pub fn is_end(&self) -> bool {
        self.time == END_OF_BRIEFING_TIME && self.kind == EventKind::EndBriefing
    }

    /// Length of the encoded event in 16-bit words
    pub fn word_len(&self) -> usize {
        2 + self.kind.param_count()
    }

    /// Encode into the briefing's word stream
    pub fn to_words(&self) -> Vec<i16> {
        let count = self.kind.param_count();
        let mut words = Vec::with_capacity(2 + count);
        words.push(self.time as i16);
        words.push(i16::from(self.kind.opcode()));
        words.extend(self.params.iter().copied().chain(std::iter::repeat(0)).take(count));
        words
    }

    /// Decode a full event stream, stopping after the end sentinel
    ///
    /// Returns `None` for an unknown opcode or a truncated event.
    pub fn parse_words(words: &[i16]) -> Option<Vec<BriefingEvent>> {
        let mut events = Vec::new();
        let mut pos = 0;
        while pos + 1 < words.len() {
            let time = words[pos] as u16;
            let kind = EventKind::from_opcode(u8::try_from(words[pos + 1]).ok()?)?;
            let end = pos + 2 + kind.param_count();
            let params = words.get(pos + 2..end)?.to_vec();
            let event = BriefingEvent::new(time, kind, params);
            let done = event.is_end();
            events.push(event);
            pos = end;
            if done {
                break;
            }
        }
        Some(events)
    }
}

/// A briefing: event timeline plus tag and text string tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Briefing {
    /// Running time in ticks
    pub length: u16,
    pub events: Vec<BriefingEvent>,
    pub tags: Vec<String>,
    pub strings: Vec<String>,
}

impl Briefing {
    /// An empty briefing sized for the platform
    pub fn new(platform: Platform) -> Self {
        let limits = platform.limits();
        Self {
            length: 0,
            events: vec![BriefingEvent::end()],
            tags: vec![String::new(); limits.briefing_tags],
            strings: vec![String::new(); limits.briefing_strings],
        }
    }

    /// Total encoded length of all events in 16-bit words
    pub fn word_len(&self) -> usize {
        self.events.iter().map(BriefingEvent::word_len).sum()
    }
}

/// Truncate to at most `max` characters
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
