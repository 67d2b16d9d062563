use crate::planner::ChunkRange;
use std::path::Path;

/// File name for one chunk of `input`
///
/// `{stem}_del_{index}_av_{total}_sidor_{first}-{last}.pdf`, with the chunk
/// index and both page numbers 1-based.
pub fn chunk_file_name(input: &Path, range: &ChunkRange) -> String {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();

    format!(
        "{}_del_{}_av_{}_sidor_{}-{}.pdf",
        stem,
        range.chunk_index,
        range.total_chunks,
        range.first_page_number(),
        range.last_page_number()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::plan;
    use std::num::NonZeroUsize;

    #[test]
    fn test_names_for_report_pdf() {
        let input = Path::new("/tmp/report.pdf");
        let names: Vec<String> = plan(45, NonZeroUsize::new(20).unwrap())
            .iter()
            .map(|range| chunk_file_name(input, range))
            .collect();

        assert_eq!(
            names,
            vec![
                "report_del_1_av_3_sidor_1-20.pdf",
                "report_del_2_av_3_sidor_21-40.pdf",
                "report_del_3_av_3_sidor_41-45.pdf",
            ]
        );
    }

    #[test]
    fn test_single_page_chunk() {
        let range = ChunkRange {
            chunk_index: 1,
            start_page: 0,
            end_page: 1,
            total_chunks: 1,
        };
        assert_eq!(
            chunk_file_name(Path::new("samling_av_pdf.pdf"), &range),
            "samling_av_pdf_del_1_av_1_sidor_1-1.pdf"
        );
    }

    #[test]
    fn test_keeps_dots_in_stem() {
        let range = ChunkRange {
            chunk_index: 2,
            start_page: 10,
            end_page: 12,
            total_chunks: 2,
        };
        assert_eq!(
            chunk_file_name(Path::new("möte.2024.pdf"), &range),
            "möte.2024_del_2_av_2_sidor_11-12.pdf"
        );
    }
}
