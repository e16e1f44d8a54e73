use crate::error::{PrepareError, Result, TableKind};

/// количество бит, которыми может быть закодирован любой кодпоинт (U+10FFFF)
pub const CODEPOINT_BITS: u32 = 21;

#[macro_export]
/// начало выровненного блока размером 1 << $bits, содержащего кодпоинт
macro_rules! block_base {
    ($code: expr, $bits: expr) => {
        ($code >> $bits) << $bits
    };
}

#[macro_export]
/// смещение кодпоинта внутри выровненного блока размером 1 << $bits
macro_rules! block_offset {
    ($code: expr, $bits: expr) => {
        $code & ((1 << $bits) - 1)
    };
}

/// маска из bits младших бит
#[inline]
pub const fn low_bits(bits: u32) -> u64
{
    match bits >= 64 {
        true => u64::MAX,
        false => (1 << bits) - 1,
    }
}

/// убедиться, что значение помещается в bits бит
#[inline]
pub fn checked(table: &TableKind, code: u32, value: u64, bits: u32) -> Result<u64>
{
    match value & !low_bits(bits) == 0 {
        true => Ok(value),
        false => Err(PrepareError::CapacityOverflow {
            table: table.clone(),
            code,
            value,
            bits,
        }),
    }
}

/// упаковать поля в одно значение, первое поле - старшее:
///
///   pack(.., &[(a, 8), (b, 24)]) => aaaa aaaa  bbbb bbbb  bbbb bbbb  bbbb bbbb
///
/// каждое поле проверяется на переполнение, code - кодпоинт (или индекс) для сообщения об ошибке
pub fn pack(table: &TableKind, code: u32, fields: &[(u64, u32)]) -> Result<u64>
{
    let mut value = 0;
    let mut width = 0;

    for &(field, bits) in fields {
        value = (value << bits) | checked(table, code, field, bits)?;
        width += bits;
    }

    debug_assert!(width <= 64);

    Ok(value)
}

/// упаковать поля в 32-битное значение
pub fn pack32(table: &TableKind, code: u32, fields: &[(u64, u32)]) -> Result<u32>
{
    let value = pack(table, code, fields)?;

    Ok(checked(table, code, value, 32)? as u32)
}

#[test]
fn packing()
{
    let table = TableKind::CharClasses;

    assert_eq!(pack32(&table, 0, &[(0xAB, 8), (0x12345, 24)]), Ok(0xAB012345));
    assert_eq!(
        pack(&table, 0, &[(0xC0, 24), (0x41, 20), (0x300, 20)]),
        Ok(0xC0_00041_00300)
    );
    assert_eq!(block_base!(0x1F3u32, 5), 0x1E0);
    assert_eq!(block_offset!(0x1F3u32, 5), 0x13);

    assert_eq!(
        pack(&table, 7, &[(0x100000, 20)]),
        Err(PrepareError::CapacityOverflow {
            table: TableKind::CharClasses,
            code: 7,
            value: 0x100000,
            bits: 20,
        })
    );
}
