use std::collections::HashMap;

pub type Keysym = u32;

pub const NO_SYMBOL: Keysym = 0;
pub const VOID_SYMBOL: Keysym = 0x00ff_ffff;

/// Offset added to a Unicode code point to form its keysym.
pub const UNICODE_KEYSYM_OFFSET: Keysym = 0x0100_0000;

/// Turns a keysym name into its code.
pub trait KeysymResolver {
    fn resolve(&self, name: &str) -> Option<Keysym>;
}

impl<F> KeysymResolver for F
where
    F: Fn(&str) -> Option<Keysym>,
{
    fn resolve(&self, name: &str) -> Option<Keysym> {
        self(name)
    }
}

/// Looks up a keysym name, recognising the reserved words before asking the resolver.
///
/// A missing name, `any` and `NoSymbol` yield [`NO_SYMBOL`]; `none` and
/// `VoidSymbol` yield [`VOID_SYMBOL`]. Reserved words match case-insensitively.
pub fn lookup_keysym<R: KeysymResolver + ?Sized>(name: Option<&str>, resolver: &R) -> Option<Keysym> {
    let name = match name {
        Some(name) => name,
        None => return Some(NO_SYMBOL),
    };

    if name.eq_ignore_ascii_case("any") || name.eq_ignore_ascii_case("nosymbol") {
        return Some(NO_SYMBOL);
    }
    if name.eq_ignore_ascii_case("none") || name.eq_ignore_ascii_case("voidsymbol") {
        return Some(VOID_SYMBOL);
    }

    match resolver.resolve(name) {
        Some(NO_SYMBOL) | None => None,
        Some(sym) => Some(sym),
    }
}

/// Keysym for a Unicode code point. Latin-1 printable characters map onto themselves.
pub fn unicode_to_keysym(cp: u32) -> Keysym {
    if (0x20..=0x7e).contains(&cp) || (0xa0..=0xff).contains(&cp) {
        cp
    } else {
        UNICODE_KEYSYM_OFFSET + cp
    }
}

/// Small resolver covering the names most layouts reach for.
///
/// Understands single printable Latin-1 characters, `Uxxxx` Unicode names,
/// `0x` hexadecimal codes and a table of common function and punctuation
/// keys. Anything else is unknown.
pub struct BasicKeysymResolver {
    names: HashMap<&'static str, Keysym>,
}

impl BasicKeysymResolver {
    pub fn new() -> Self {
        Self {
            names: create_keysym_map(),
        }
    }
}

impl Default for BasicKeysymResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl KeysymResolver for BasicKeysymResolver {
    fn resolve(&self, name: &str) -> Option<Keysym> {
        if let Some(&sym) = self.names.get(name) {
            return Some(sym);
        }

        let mut chars = name.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            let cp = ch as u32;
            if ch.is_ascii_alphanumeric() || (0xa0..=0xff).contains(&cp) {
                return Some(cp);
            }
            return None;
        }

        if let Some(hex) = name.strip_prefix('U') {
            if hex.len() >= 4 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
                let cp = u32::from_str_radix(hex, 16).ok()?;
                if cp > 0x10ffff {
                    return None;
                }
                return Some(unicode_to_keysym(cp));
            }
        }

        if let Some(hex) = name.strip_prefix("0x") {
            return u32::from_str_radix(hex, 16).ok();
        }

        None
    }
}

pub fn create_keysym_map() -> HashMap<&'static str, Keysym> {
    let mut map = HashMap::new();

    // Punctuation
    map.insert("space", 0x0020);
    map.insert("exclam", 0x0021);
    map.insert("quotedbl", 0x0022);
    map.insert("numbersign", 0x0023);
    map.insert("dollar", 0x0024);
    map.insert("percent", 0x0025);
    map.insert("ampersand", 0x0026);
    map.insert("apostrophe", 0x0027);
    map.insert("parenleft", 0x0028);
    map.insert("parenright", 0x0029);
    map.insert("asterisk", 0x002a);
    map.insert("plus", 0x002b);
    map.insert("comma", 0x002c);
    map.insert("minus", 0x002d);
    map.insert("period", 0x002e);
    map.insert("slash", 0x002f);
    map.insert("colon", 0x003a);
    map.insert("semicolon", 0x003b);
    map.insert("less", 0x003c);
    map.insert("equal", 0x003d);
    map.insert("greater", 0x003e);
    map.insert("question", 0x003f);
    map.insert("at", 0x0040);
    map.insert("bracketleft", 0x005b);
    map.insert("backslash", 0x005c);
    map.insert("bracketright", 0x005d);
    map.insert("asciicircum", 0x005e);
    map.insert("underscore", 0x005f);
    map.insert("grave", 0x0060);
    map.insert("braceleft", 0x007b);
    map.insert("bar", 0x007c);
    map.insert("braceright", 0x007d);
    map.insert("asciitilde", 0x007e);

    // TTY functions
    map.insert("BackSpace", 0xff08);
    map.insert("Tab", 0xff09);
    map.insert("ISO_Left_Tab", 0xfe20);
    map.insert("Return", 0xff0d);
    map.insert("Pause", 0xff13);
    map.insert("Scroll_Lock", 0xff14);
    map.insert("Escape", 0xff1b);
    map.insert("Delete", 0xffff);

    // Cursor control
    map.insert("Home", 0xff50);
    map.insert("Left", 0xff51);
    map.insert("Up", 0xff52);
    map.insert("Right", 0xff53);
    map.insert("Down", 0xff54);
    map.insert("Prior", 0xff55);
    map.insert("Next", 0xff56);
    map.insert("End", 0xff57);
    map.insert("Insert", 0xff63);
    map.insert("Menu", 0xff67);
    map.insert("Num_Lock", 0xff7f);

    // Function keys
    let function_keys = [
        "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
    ];
    for (offset, name) in function_keys.iter().enumerate() {
        map.insert(*name, 0xffbe + offset as Keysym);
    }

    // Modifiers
    map.insert("Shift_L", 0xffe1);
    map.insert("Shift_R", 0xffe2);
    map.insert("Control_L", 0xffe3);
    map.insert("Control_R", 0xffe4);
    map.insert("Caps_Lock", 0xffe5);
    map.insert("Shift_Lock", 0xffe6);
    map.insert("Meta_L", 0xffe7);
    map.insert("Meta_R", 0xffe8);
    map.insert("Alt_L", 0xffe9);
    map.insert("Alt_R", 0xffea);
    map.insert("Super_L", 0xffeb);
    map.insert("Super_R", 0xffec);
    map.insert("Hyper_L", 0xffed);
    map.insert("Hyper_R", 0xffee);
    map.insert("ISO_Level3_Shift", 0xfe03);
    map.insert("ISO_Level5_Shift", 0xfe11);
    map.insert("Mode_switch", 0xff7e);

    map
}
