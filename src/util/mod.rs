pub(crate) mod display;

pub(crate) use self::display::Display;
