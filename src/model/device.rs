use std::fmt;

/// Device selector accepted on the command line.
///
/// Each selector maps to exactly one App Store Connect `screenshotDisplayType`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Device {
    #[value(name = "iphone-5.5")]
    Iphone55,
    #[value(name = "iphone-6.5")]
    Iphone65,
    #[value(name = "iphone-6.7")]
    Iphone67,
    #[value(name = "iphone-6.9")]
    Iphone69,
    #[default]
    #[value(name = "ipad-13")]
    Ipad13,
    #[value(name = "ipad-11")]
    Ipad11,
}

impl Device {
    pub const ALL: [Device; 6] = [
        Device::Iphone55,
        Device::Iphone65,
        Device::Iphone67,
        Device::Iphone69,
        Device::Ipad13,
        Device::Ipad11,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Device::Iphone55 => "iphone-5.5",
            Device::Iphone65 => "iphone-6.5",
            Device::Iphone67 => "iphone-6.7",
            Device::Iphone69 => "iphone-6.9",
            Device::Ipad13 => "ipad-13",
            Device::Ipad11 => "ipad-11",
        }
    }

    pub fn display_type(self) -> &'static str {
        match self {
            Device::Iphone55 => "APP_IPHONE_55",
            Device::Iphone65 => "APP_IPHONE_65",
            Device::Iphone67 => "APP_IPHONE_67",
            Device::Iphone69 => "APP_IPHONE_69",
            Device::Ipad13 => "APP_IPAD_PRO_3GEN_129",
            Device::Ipad11 => "APP_IPAD_PRO_3GEN_11",
        }
    }

    pub fn from_code(code: &str) -> Option<Device> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }

    pub fn from_display_type(display_type: &str) -> Option<Device> {
        Self::ALL
            .into_iter()
            .find(|d| d.display_type() == display_type)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
#[path = "../tests/model/device_tests.rs"]
mod tests;
