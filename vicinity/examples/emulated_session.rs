// Full session walkthrough against the in-memory emulated tag.
//
// No hardware needed. Frame traffic shows up with logging enabled:
//   RUST_LOG=trace cargo run -p vicinity --example emulated_session

use anyhow::Result;
use vicinity::prelude::*;
use vicinity::transport::EmulatedVicinityTag;

fn main() -> Result<()> {
    env_logger::init();

    // A 28x4 tag, the common ICODE SLIX shape, with preset registers.
    let uid_wire = [0xE0, 0x04, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
    let mut emulated = EmulatedVicinityTag::new(&uid_wire, 28, 4);
    emulated.set_afi(0xC4);
    emulated.set_dsfid(0x01);

    let session = Tag::with_wire_uid(Uid::from_wire(uid_wire.to_vec())?, Box::new(emulated));
    let mut tag = session.initialize()?;

    println!("=== Tag discovered ===");
    println!("uid       : {}", tag.uid_hex());
    println!(
        "geometry  : {} blocks x {} bytes = {} bytes",
        tag.info().block_count(),
        tag.info().block_size(),
        tag.info().capacity()
    );
    println!(
        "registers : AFI={} DSFID={}",
        tag.info().afi_hex(),
        tag.info().dsfid_hex()
    );

    println!("\n=== Writing text ===");
    tag.write_string("stored on an emulated vicinity tag")?;
    match tag.read_all()? {
        Some(text) => println!("read_all  : {:?}", text.trim_matches('\0')),
        None => println!("read_all  : tag reported an error"),
    }
    if let Some(block) = tag.read_block(0)? {
        println!("block 0   : {}", bytes_to_hex_spaced(&block));
    }

    println!("\n=== Batch write ===");
    if tag.write_string_batch("batch attempt")? {
        println!("batch     : accepted");
    } else {
        println!("batch     : rejected by the tag, as most real tags do");
    }

    println!("\n=== Locking the AFI ===");
    tag.write_afi(0x40)?;
    tag.lock_afi()?;
    if !tag.write_afi(0x41)? {
        println!("afi       : locked at 0x{:02X}", tag.system_info()?.afi);
    }

    tag.close()?;
    Ok(())
}
