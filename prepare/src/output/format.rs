/// запись таблицы кодпоинтов: {смещение,длина,код,комбинирующий}
pub fn format_entry(offset: usize, len: usize, code: u32, is_combining: bool) -> String
{
    format!(
        "{{{},{},{},{}}}",
        offset,
        len,
        code,
        match is_combining {
            true => 1,
            false => 0,
        }
    )
}

/// представить буфер названий строками C-литерала, не длиннее boundary байт буфера каждая
///
/// escape-последовательности не разрываются и в длину не входят: граница считается по буферу
pub fn format_heap_lines(heap: &str, boundary: usize) -> Vec<String>
{
    heap.as_bytes()
        .chunks(boundary.max(1))
        .map(|chunk| {
            let mut line = String::with_capacity(chunk.len());

            for &byte in chunk {
                escape_byte(byte, &mut line);
            }

            line
        })
        .collect()
}

/// байт внутри строкового литерала C
///
/// непечатаемые байты и байты за пределами ASCII записываются восьмеричными escape-последовательностями
/// ровно из трёх цифр, чтобы следующая цифра не стала частью последовательности
fn escape_byte(byte: u8, output: &mut String)
{
    match byte {
        b'"' => output.push_str("\\\""),
        b'\\' => output.push_str("\\\\"),
        0x20 ..= 0x7E => output.push(byte as char),
        _ => output.push_str(&format!("\\{:03o}", byte)),
    }
}
