//! Declarative byte layout of the `PriceUpdateV2` account.
//!
//! The table below is the single source of truth for offsets and widths. The
//! encoder and the read-back path both walk it, so the arithmetic that is
//! easiest to get wrong in a hand-rolled layout lives in exactly one place.

/// How a field's value is turned into bytes. Multi-byte integers are little
/// endian, as everywhere in Solana account data.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Encoding {
    /// Raw bytes of the given length, copied verbatim.
    Bytes(usize),
    U8,
    I32,
    I64,
    U64,
}

impl Encoding {
    pub const fn width(self) -> usize {
        match self {
            Encoding::Bytes(len) => len,
            Encoding::U8 => 1,
            Encoding::I32 => 4,
            Encoding::I64 | Encoding::U64 => 8,
        }
    }
}

/// One field of the account layout.
#[derive(Debug)]
pub struct Field {
    pub name: &'static str,
    pub offset: usize,
    pub encoding: Encoding,
}

/// `VerificationLevel::Full`, the only level fixtures emit. The `Partial`
/// variant (0) is followed by a signature-count byte, which would shift every
/// later offset.
pub const VERIFICATION_LEVEL_FULL: u8 = 1;

/// The receiver program's `PriceUpdateV2` layout: discriminator, write
/// authority, verification tag, the 84-byte price feed message, posted slot.
pub static PRICE_UPDATE_FIELDS: [Field; 12] = [
    Field { name: "discriminator", offset: 0, encoding: Encoding::Bytes(8) },
    Field { name: "authority", offset: 8, encoding: Encoding::Bytes(32) },
    Field { name: "verification_level", offset: 40, encoding: Encoding::U8 },
    Field { name: "feed_id", offset: 41, encoding: Encoding::Bytes(32) },
    Field { name: "price", offset: 73, encoding: Encoding::I64 },
    Field { name: "conf", offset: 81, encoding: Encoding::U64 },
    Field { name: "exponent", offset: 89, encoding: Encoding::I32 },
    Field { name: "publish_time", offset: 93, encoding: Encoding::I64 },
    Field { name: "prev_publish_time", offset: 101, encoding: Encoding::I64 },
    Field { name: "ema_price", offset: 109, encoding: Encoding::I64 },
    Field { name: "ema_conf", offset: 117, encoding: Encoding::U64 },
    Field { name: "posted_slot", offset: 125, encoding: Encoding::U64 },
];

/// Total size of the account data.
pub const PRICE_UPDATE_DATA_LEN: usize = 133;

fn field(name: &str) -> &'static Field {
    PRICE_UPDATE_FIELDS
        .iter()
        .find(|field| field.name == name)
        .unwrap_or_else(|| panic!("no field named {name} in the price update layout"))
}

/// Sequential writer over a price update buffer.
///
/// Every write is checked against the layout table: the field name, its
/// position in the write order, and the encoding must all match. A mismatch is
/// a bug in the encoder, and a miswritten fixture would corrupt an otherwise
/// valid test downstream, so the writer panics instead of truncating.
pub(crate) struct FieldWriter<'a> {
    buf: &'a mut [u8; PRICE_UPDATE_DATA_LEN],
    next: usize,
}

impl<'a> FieldWriter<'a> {
    pub(crate) fn new(buf: &'a mut [u8; PRICE_UPDATE_DATA_LEN]) -> Self {
        Self { buf, next: 0 }
    }

    fn claim(&mut self, name: &str, encoding: Encoding) -> &mut [u8] {
        let field = &PRICE_UPDATE_FIELDS[self.next];
        assert_eq!(field.name, name, "fields must be written in layout order");
        assert_eq!(field.encoding, encoding, "encoding mismatch for {name}");
        self.next += 1;
        &mut self.buf[field.offset..field.offset + encoding.width()]
    }

    pub(crate) fn put_bytes(&mut self, name: &str, value: &[u8]) {
        self.claim(name, Encoding::Bytes(value.len()))
            .copy_from_slice(value);
    }

    pub(crate) fn put_u8(&mut self, name: &str, value: u8) {
        self.claim(name, Encoding::U8)[0] = value;
    }

    pub(crate) fn put_i32(&mut self, name: &str, value: i32) {
        self.claim(name, Encoding::I32)
            .copy_from_slice(&value.to_le_bytes());
    }

    pub(crate) fn put_i64(&mut self, name: &str, value: i64) {
        self.claim(name, Encoding::I64)
            .copy_from_slice(&value.to_le_bytes());
    }

    pub(crate) fn put_u64(&mut self, name: &str, value: u64) {
        self.claim(name, Encoding::U64)
            .copy_from_slice(&value.to_le_bytes());
    }

    pub(crate) fn finish(self) {
        assert_eq!(
            self.next,
            PRICE_UPDATE_FIELDS.len(),
            "every layout field must be written"
        );
    }
}

pub(crate) fn read_array<const N: usize>(data: &[u8], name: &str) -> [u8; N] {
    let field = field(name);
    debug_assert_eq!(field.encoding.width(), N, "width mismatch for {name}");
    let mut out = [0u8; N];
    out.copy_from_slice(&data[field.offset..field.offset + N]);
    out
}

pub(crate) fn read_u8(data: &[u8], name: &str) -> u8 {
    let field = field(name);
    debug_assert_eq!(field.encoding, Encoding::U8);
    data[field.offset]
}

pub(crate) fn read_i32(data: &[u8], name: &str) -> i32 {
    debug_assert_eq!(field(name).encoding, Encoding::I32);
    i32::from_le_bytes(read_array(data, name))
}

pub(crate) fn read_i64(data: &[u8], name: &str) -> i64 {
    debug_assert_eq!(field(name).encoding, Encoding::I64);
    i64::from_le_bytes(read_array(data, name))
}

pub(crate) fn read_u64(data: &[u8], name: &str) -> u64 {
    debug_assert_eq!(field(name).encoding, Encoding::U64);
    u64::from_le_bytes(read_array(data, name))
}
