//! A program for decompilation of binary files via the
//! [RetDec](https://github.com/avast/retdec) IDA plugin. Internally, it uses
//! the `retdec-ida` library.

extern crate retdec_ida;

fn main() {
    retdec_ida::tools::run_decompile::main();
}
