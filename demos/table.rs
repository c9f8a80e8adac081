use pdf_tablelist::layout::{layout_table, Margins};
use pdf_tablelist::pagesize::A5;
use pdf_tablelist::*;

fn main() {
    let dejavu = include_bytes!("../tests/assets/DejaVuSansMono.ttf");
    let dejavu = Font::load(dejavu.to_vec()).expect("can load font");
    let fonts = FontBook::new(dejavu);

    let rows: Vec<[String; 3]> = (1..=150)
        .map(|i| {
            [
                format!("{i:03}"),
                lipsum::lipsum(2 + i % 14),
                format!("{:.2}", i as f32 * 3.75),
            ]
        })
        .collect();

    let mut style = TableStyle {
        alternated_background: Some(colours::LIGHT_GREY),
        vertical_content_padding: Pt(4.0),
        line: true,
        ..Default::default()
    };
    style.content.columns = vec![
        ColumnSpec::new(2),
        ColumnSpec::new(8),
        ColumnSpec::aligned(2, Align::Right),
    ];

    let mut remaining = &rows[..];
    let mut page_index = 0;
    while !remaining.is_empty() {
        // add a 10mm gutter
        let mut margins = Margins::all(In(0.5));
        if page_index % 2 == 0 {
            margins.left += Mm(10.0).into();
        } else {
            margins.right += Mm(10.0).into();
        }

        let mut page = Page::new(A5, margins);
        let placed = layout_table(&fonts, &mut page, &["#", "Description", "Total"], remaining, &style)
            .expect("rows match the header");
        if placed == 0 {
            eprintln!("row {} is taller than a page", rows.len() - remaining.len());
            break;
        }
        remaining = &remaining[placed..];
        page_index += 1;

        let path = format!("table-page-{page_index}.content");
        std::fs::write(&path, page.render(&fonts)).unwrap();
        println!("{path}: {placed} rows");
    }
}
