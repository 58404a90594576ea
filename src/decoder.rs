//! Table-driven byte-at-a-time Fibonacci decoder.
//!
//! The decoder walks the byte stream with one byte of lookahead. For each
//! byte it looks up a transition record describing which codewords close
//! or open inside that byte, accumulating cross-byte fragments in a small
//! buffer that is reassembled with the Fibonacci left-shift identity when
//! a codeword's closing pair is seen.
//!
//! Marker pairs may straddle a byte boundary. That case is detected one
//! byte late: when the current byte starts with a `1` that extends an
//! open codeword, the previous byte is re-read through the second table,
//! which treats its top bit as the first half of the straddling pair.

use crate::tables::{lfib_shift, DECODE_TABLES, FIB_LEN};

/// Decode up to `count` values from `input`.
///
/// `input` must end with a closing pair for the last wanted value plus at
/// least one further byte (the vector layer appends the terminator and
/// two zero bytes). Values are returned with the `+2` offset removed;
/// fragments still open when the input ends are dropped.
pub(crate) fn decode(input: &[u8], count: usize) -> Vec<u64> {
    let mut result = Vec::with_capacity(count.min(1024));
    if count == 0 || input.len() < 2 {
        return result;
    }

    let tables = &*DECODE_TABLES;
    let mut fbuffer: Vec<u8> = Vec::with_capacity(16);
    let mut prev_in = input[0];
    let mut prev_rec = &tables.t0[prev_in as usize];

    for &cur in &input[1..] {
        let end_with_one = prev_in & 0x80 != 0;

        let rec = &tables.t0[cur as usize];
        // A current byte opening with a `1` that continues an open
        // codeword means the closing pair straddles the byte boundary:
        // re-read the previous byte with its top bit handed over.
        let start_with_one = cur & 1 == 1 && rec.shift > 0;
        if start_with_one {
            prev_rec = &tables.t1[prev_in as usize];
        }
        prev_in = cur;

        let mut shift = usize::from(prev_rec.shift);
        if shift > 0 {
            fbuffer.push(prev_rec.incomplete);
        }

        for &num in &prev_rec.numbers {
            let dec = assemble(&fbuffer, if shift == 0 { 8 } else { shift });
            fbuffer.clear();
            shift = 0;

            // Values of 0 and 1 are sliced-off garbage and pad phantoms.
            if dec > 1 {
                result.push(dec - 2);
                if result.len() == count {
                    return result;
                }
            }
            fbuffer.push(num);
        }

        if start_with_one && end_with_one {
            // The straddling pair closed the open codeword at the
            // previous byte's end; its final fragment spans 7 bits.
            let dec = assemble(&fbuffer, 7);
            fbuffer.clear();
            if dec > 1 {
                result.push(dec - 2);
                if result.len() == count {
                    return result;
                }
            }
        }

        prev_rec = rec;
    }

    result
}

/// Reassemble buffered fragments into a value.
///
/// The newest fragment holds `last_len` bits; every earlier fragment was
/// a full byte, so each step left-shifts the running total's predecessors
/// by eight more positions using `V(F(v) <<f k) = F(k)v + F(k-1)VF1[v]`.
fn assemble(fbuffer: &[u8], last_len: usize) -> u64 {
    let Some((&last, rest)) = fbuffer.split_last() else {
        return 0;
    };

    let mut sum = u64::from(last);
    let mut shift = last_len;
    for &fragment in rest.iter().rev() {
        if shift >= FIB_LEN {
            // Codewords never exceed 63 bits; a longer run of fragments
            // means the buffer is corrupt. Stop instead of reading past
            // the Fibonacci table.
            break;
        }
        sum += lfib_shift(u64::from(fragment), shift);
        shift += 8;
    }
    sum
}
