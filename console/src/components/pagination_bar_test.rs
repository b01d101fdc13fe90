use wire::ListMeta;

use super::*;

#[test]
fn count_label_uses_total_pages() {
    let mut pager = Pager::default();
    pager.apply_meta(ListMeta { total: 12, total_pages: 3 });
    assert_eq!(page_count_label(&pager), "from 3");
}
