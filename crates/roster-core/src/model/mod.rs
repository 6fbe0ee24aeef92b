pub mod event;
pub mod player;

pub use event::Event;
pub use player::{
    DayLabel, DayType, EffectType, Equipment, EquipmentEffect, Handedness, Modification,
    PlayerVersion, Report, Slot,
};
