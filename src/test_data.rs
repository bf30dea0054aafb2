#[cfg(test)]
pub const LIST_RESPONSE: &str = r##"{
  "data": [
    {
      "id": 1,
      "attributes": {
        "title": "Nested post",
        "slug": "nested-post",
        "description": "Fields live under attributes",
        "publishedAt": "2024-03-01T10:00:00.000Z",
        "content": [
          {"type": "paragraph", "children": [{"type": "text", "text": "First paragraph with **bold**."}]},
          {"type": "paragraph", "children": [{"type": "text", "text": "Second one, "}, {"type": "text", "text": "see [docs](https://example.com)."}]}
        ],
        "featuredImage": {"data": {"id": 4, "attributes": {"url": "/uploads/nested.png"}}},
        "author": {"data": {"id": 2, "attributes": {"name": "Ada", "email": "ada@example.com"}}}
      }
    },
    {
      "id": 2,
      "title": "Direct post",
      "slug": "direct-post",
      "description": "",
      "publishedAt": "2024-02-10T08:30:00.000Z",
      "content": "<p>Direct *body*</p>Drag",
      "featuredImage": {"url": "https://cdn.example.com/direct.png"},
      "author": null
    },
    {
      "id": 3,
      "attributes": {
        "title": "Draft without slug"
      }
    }
  ],
  "meta": {"pagination": {"page": 1, "pageSize": 25, "pageCount": 1, "total": 3}}
}"##;

#[cfg(test)]
pub const SINGLE_RESPONSE: &str = r##"{
  "data": [
    {
      "id": 1,
      "attributes": {
        "title": "Nested post",
        "slug": "nested-post",
        "content": "Hello"
      }
    }
  ],
  "meta": {}
}"##;
