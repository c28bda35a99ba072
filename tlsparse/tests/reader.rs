use tlsparse::{Malformed, Reader};

#[test]
fn fixed_width_reads_are_big_endian() -> anyhow::Result<()> {
    let input = [
        0x01, // u8
        0x02, 0x03, // u16
        0x04, 0x05, 0x06, // u24
        0x07, 0x08, 0x09, 0x0a, // u32
        0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10, // u48
        0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, // u64
    ];
    let mut reader = Reader::new(&input);
    assert_eq!(reader.read_u8()?, 0x01);
    assert_eq!(reader.read_u16()?, 0x0203);
    assert_eq!(reader.read_u24()?, 0x04_0506);
    assert_eq!(reader.read_u32()?, 0x0708_090a);
    assert_eq!(reader.read_u48()?, 0x0b0c_0d0e_0f10);
    assert_eq!(reader.read_u64()?, 0x1112_1314_1516_1718);
    assert!(reader.is_empty());
    reader.finish()?;
    Ok(())
}

#[test]
fn fixed_width_extremes() -> anyhow::Result<()> {
    let ones = [0xff; 8];
    assert_eq!(Reader::new(&ones).read_u8()?, u8::MAX);
    assert_eq!(Reader::new(&ones).read_u16()?, u16::MAX);
    assert_eq!(Reader::new(&ones).read_u24()?, 0x00ff_ffff);
    assert_eq!(Reader::new(&ones).read_u32()?, u32::MAX);
    assert_eq!(Reader::new(&ones).read_u48()?, 0xffff_ffff_ffff);
    assert_eq!(Reader::new(&ones).read_u64()?, u64::MAX);
    let zeros = [0x00; 8];
    assert_eq!(Reader::new(&zeros).read_u64()?, 0);
    Ok(())
}

#[test]
fn short_reads_fail_without_consuming() {
    let input = [0xaa, 0xbb, 0xcc];
    let mut reader = Reader::new(&input);
    assert_eq!(
        reader.read_u32(),
        Err(Malformed::Truncated {
            required: 4,
            remaining: 3
        })
    );
    assert_eq!(reader.len(), 3);
    assert_eq!(reader.read_u24(), Ok(0xaa_bbcc));
    assert_eq!(
        reader.read_u8(),
        Err(Malformed::Truncated {
            required: 1,
            remaining: 0
        })
    );
}

#[test]
fn length_prefixed_regions() -> anyhow::Result<()> {
    let input = [
        0x02, 0xab, 0xcd, // u8 prefixed
        0x00, 0x01, 0xee, // u16 prefixed
        0x00, 0x00, 0x00, // u24 prefixed, empty
        0x99,
    ];
    let mut reader = Reader::new(&input);
    assert_eq!(reader.read_u8_length_prefixed()?.as_slice(), &[0xab, 0xcd]);
    assert_eq!(reader.read_u16_length_prefixed()?.as_slice(), &[0xee]);
    let empty = reader.read_u24_length_prefixed()?;
    assert!(empty.is_empty());
    assert_eq!(reader.as_slice(), &[0x99]);
    assert_eq!(
        reader.finish(),
        Err(Malformed::TrailingBytes { remaining: 1 })
    );
    Ok(())
}

#[test]
fn length_prefixed_short_payload_is_atomic() {
    // declares 4 bytes, only 2 follow.
    let input = [0x00, 0x04, 0x01, 0x02];
    let mut reader = Reader::new(&input);
    assert_eq!(
        reader.read_u16_length_prefixed(),
        Err(Malformed::Truncated {
            required: 4,
            remaining: 2
        })
    );
    assert_eq!(reader.as_slice(), &input);

    // the prefix itself is short.
    let mut reader = Reader::new(&input[..2]);
    assert_eq!(
        reader.read_u24_length_prefixed(),
        Err(Malformed::Truncated {
            required: 3,
            remaining: 2
        })
    );
    assert_eq!(reader.len(), 2);
}

#[test]
fn sub_region_reads_are_independent() -> anyhow::Result<()> {
    let input = [0x03, 0x00, 0x07, 0x08, 0x09];
    let mut reader = Reader::new(&input);
    let mut region = reader.read_u8_length_prefixed()?;
    assert_eq!(region.read_u16()?, 0x0007);
    assert_eq!(
        region.read_u16(),
        Err(Malformed::Truncated {
            required: 2,
            remaining: 1
        })
    );
    assert_eq!(reader.read_u8()?, 0x09);
    Ok(())
}

#[test]
fn malformed_display() {
    let truncated = Malformed::Truncated {
        required: 4,
        remaining: 1,
    };
    assert_eq!(
        truncated.to_string(),
        "malformed input: expected 4 bytes, 1 bytes were remaining."
    );
    let trailing = Malformed::TrailingBytes { remaining: 2 };
    assert_eq!(
        trailing.to_string(),
        "malformed input: 2 trailing bytes after a complete value."
    );
}
